use crate::prelude::*;

use crate::{
    recipes::prelude::{Category, Recipe, Review},
    utils::CCStr,
};

use super::utils::FResource;

pub fn use_resource_recipes(category: ReadOnlySignal<Option<Category>>) -> FResource<Vec<Recipe>> {
    let catalog_service = state_management::use_catalog_service();
    use_resource(move || {
        let category = category();
        // Re-run whenever the catalog changes
        let _ = state_management::CATALOG_REVISION();
        async move {
            log::debug!("use_resource_recipes - start");
            let recipes = state_management::list_recipes(catalog_service, category).await;
            log::debug!("use_resource_recipes - loaded");
            recipes
        }
    })
}

pub fn use_resource_recipe(recipe_id: ReadOnlySignal<CCStr>) -> FResource<Option<Recipe>> {
    let catalog_service = state_management::use_catalog_service();
    use_resource(move || {
        let recipe_id = recipe_id();
        let _ = state_management::CATALOG_REVISION();
        async move {
            log::debug!("use_resource_recipe - start {recipe_id}");
            let recipe = state_management::get_recipe(catalog_service, recipe_id).await;
            log::debug!("use_resource_recipe - loaded");
            recipe
        }
    })
}

pub fn use_resource_reviews(recipe_id: ReadOnlySignal<CCStr>) -> FResource<Vec<Review>> {
    let catalog_service = state_management::use_catalog_service();
    use_resource(move || {
        let recipe_id = recipe_id();
        let _ = state_management::CATALOG_REVISION();
        async move {
            log::debug!("use_resource_reviews - start {recipe_id}");
            let reviews = state_management::list_reviews(catalog_service, recipe_id).await;
            log::debug!("use_resource_reviews - loaded");
            reviews
        }
    })
}

pub fn use_memo_is_favorite(recipe_id: ReadOnlySignal<CCStr>) -> Memo<bool> {
    use_memo(move || state_management::FAVORITES.read().contains(recipe_id.read().as_ref()))
}
