pub mod catalog;
pub mod models;

pub mod prelude {
    pub use super::catalog::{CatalogError, RecipeCatalog};
    pub use super::models::{
        Category, Difficulty, Ingredient, NewReview, Palette, Recipe, RecipeDraft, RecipeForm,
        Review, ReviewError, Step,
    };
}
