mod lazy_image;
mod recipes;
mod utils;

pub mod prelude {
    pub use super::utils::{FResource, LoadableFaillibleMapper};
    pub mod helper_hooks {
        pub use super::super::lazy_image::use_lazy_image;
        pub use super::super::recipes::{
            use_memo_is_favorite, use_resource_recipe, use_resource_recipes,
            use_resource_reviews,
        };
    }
}
