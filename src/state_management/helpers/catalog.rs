use super::*;

use crate::recipes::prelude::{Category, NewReview, Recipe, RecipeDraft, Review};

pub async fn list_recipes(
    catalog_service: Coroutine<CatalogCommand>,
    category: Option<Category>,
) -> Result<Vec<Recipe>, CCStr> {
    log::debug!("list_recipes - start");
    let (result, rx) = oneshot::channel();
    catalog_service.send(CatalogCommand::ListRecipes { category, result });
    let recipes = service_reply(rx, "catalog_service").await;
    log::debug!("list_recipes - loaded");
    recipes
}

pub async fn get_recipe(
    catalog_service: Coroutine<CatalogCommand>,
    recipe_id: CCStr,
) -> Result<Option<Recipe>, CCStr> {
    log::debug!("get_recipe - start");
    let (result, rx) = oneshot::channel();
    catalog_service.send(CatalogCommand::GetRecipe { recipe_id, result });
    let recipe = service_reply(rx, "catalog_service").await;
    log::debug!("get_recipe - loaded");
    recipe
}

pub async fn delete_recipe(
    catalog_service: Coroutine<CatalogCommand>,
    recipe_id: CCStr,
) -> Result<Recipe, CCStr> {
    log::debug!("delete_recipe - start");
    let (result, rx) = oneshot::channel();
    catalog_service.send(CatalogCommand::DeleteRecipe { recipe_id, result });
    let deleted = service_reply(rx, "catalog_service")
        .await?
        .map_err(log_error_ccstr);
    log::debug!("delete_recipe - finished");
    deleted
}

pub async fn update_recipe(
    catalog_service: Coroutine<CatalogCommand>,
    recipe_id: CCStr,
    draft: RecipeDraft,
) -> Result<Recipe, CCStr> {
    log::debug!("update_recipe - start");
    let (result, rx) = oneshot::channel();
    catalog_service.send(CatalogCommand::UpdateRecipe {
        recipe_id,
        draft,
        result,
    });
    let updated = service_reply(rx, "catalog_service")
        .await?
        .map_err(log_error_ccstr);
    log::debug!("update_recipe - finished");
    updated
}

pub async fn list_reviews(
    catalog_service: Coroutine<CatalogCommand>,
    recipe_id: CCStr,
) -> Result<Vec<Review>, CCStr> {
    log::debug!("list_reviews - start");
    let (result, rx) = oneshot::channel();
    catalog_service.send(CatalogCommand::ListReviews { recipe_id, result });
    let reviews = service_reply(rx, "catalog_service")
        .await?
        .map_err(log_error_ccstr);
    log::debug!("list_reviews - loaded");
    reviews
}

pub async fn create_review(
    catalog_service: Coroutine<CatalogCommand>,
    recipe_id: CCStr,
    review: NewReview,
) -> Result<Review, CCStr> {
    log::debug!("create_review - start");
    let (result, rx) = oneshot::channel();
    catalog_service.send(CatalogCommand::CreateReview {
        recipe_id,
        review,
        result,
    });
    let created = service_reply(rx, "catalog_service")
        .await?
        .map_err(log_error_ccstr);
    log::debug!("create_review - finished");
    created
}
