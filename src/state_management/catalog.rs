use std::path::PathBuf;

use dioxus::prelude::*;

use futures_util::stream::StreamExt;
use tokio::sync::oneshot;

use crate::{
    prelude::alert_warn,
    recipes::prelude::{
        CatalogError, Category, NewReview, Recipe, RecipeCatalog, RecipeDraft, Review,
    },
    utils::CCStr,
};

use super::config::APP_CONFIG;

/// Bumped every time the catalog content changes, so resources reading it re-run
pub static CATALOG_REVISION: GlobalSignal<u64> = Signal::global(|| 0);

pub enum CatalogCommand {
    ListRecipes {
        category: Option<Category>,
        result: oneshot::Sender<Vec<Recipe>>,
    },
    GetRecipe {
        recipe_id: CCStr,
        result: oneshot::Sender<Option<Recipe>>,
    },
    DeleteRecipe {
        recipe_id: CCStr,
        result: oneshot::Sender<Result<Recipe, CatalogError>>,
    },
    UpdateRecipe {
        recipe_id: CCStr,
        draft: RecipeDraft,
        result: oneshot::Sender<Result<Recipe, CatalogError>>,
    },
    ListReviews {
        recipe_id: CCStr,
        result: oneshot::Sender<Result<Vec<Review>, CatalogError>>,
    },
    CreateReview {
        recipe_id: CCStr,
        review: NewReview,
        result: oneshot::Sender<Result<Review, CatalogError>>,
    },
}
impl core::fmt::Debug for CatalogCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListRecipes { category, .. } => f
                .debug_struct("ListRecipes")
                .field("category", category)
                .finish_non_exhaustive(),
            Self::GetRecipe { recipe_id, .. } => f
                .debug_struct("GetRecipe")
                .field("recipe_id", recipe_id)
                .finish_non_exhaustive(),
            Self::DeleteRecipe { recipe_id, .. } => f
                .debug_struct("DeleteRecipe")
                .field("recipe_id", recipe_id)
                .finish_non_exhaustive(),
            Self::UpdateRecipe { recipe_id, .. } => f
                .debug_struct("UpdateRecipe")
                .field("recipe_id", recipe_id)
                .finish_non_exhaustive(),
            Self::ListReviews { recipe_id, .. } => f
                .debug_struct("ListReviews")
                .field("recipe_id", recipe_id)
                .finish_non_exhaustive(),
            Self::CreateReview { recipe_id, .. } => f
                .debug_struct("CreateReview")
                .field("recipe_id", recipe_id)
                .finish_non_exhaustive(),
        }
    }
}

pub(super) fn use_catalog_service() -> Coroutine<CatalogCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<CatalogCommand>| async move {
            log::info!("catalog_service (coroutine) - start");

            let catalog_path = APP_CONFIG.peek().catalog_path.clone();
            let mut catalog = load_catalog(catalog_path).await;

            while let Some(cmd) = rx.next().await {
                log::debug!("catalog_service (coroutine) - Processing command {cmd:?}...");
                // Replies are dropped silently when the requester went away
                match cmd {
                    CatalogCommand::ListRecipes { category, result } => {
                        let _ = result.send(catalog.list(category));
                    }
                    CatalogCommand::GetRecipe { recipe_id, result } => {
                        let _ = result.send(catalog.get(&recipe_id));
                    }
                    CatalogCommand::DeleteRecipe { recipe_id, result } => {
                        let outcome = catalog.delete(&recipe_id);
                        if outcome.is_ok() {
                            *CATALOG_REVISION.write() += 1;
                        }
                        let _ = result.send(outcome);
                    }
                    CatalogCommand::UpdateRecipe {
                        recipe_id,
                        draft,
                        result,
                    } => {
                        let outcome = catalog.update(&recipe_id, draft);
                        if outcome.is_ok() {
                            *CATALOG_REVISION.write() += 1;
                        }
                        let _ = result.send(outcome);
                    }
                    CatalogCommand::ListReviews { recipe_id, result } => {
                        let _ = result.send(catalog.reviews(&recipe_id));
                    }
                    CatalogCommand::CreateReview {
                        recipe_id,
                        review,
                        result,
                    } => {
                        let outcome = catalog.create_review(&recipe_id, review, chrono::Utc::now());
                        if outcome.is_ok() {
                            *CATALOG_REVISION.write() += 1;
                        }
                        let _ = result.send(outcome);
                    }
                }
                log::debug!("catalog_service (coroutine) - Command processed");
            }
        },
    )
}

async fn load_catalog(path: Option<PathBuf>) -> RecipeCatalog {
    let Some(path) = path else {
        log::info!("catalog_service - no catalog path, using the built-in catalog");
        return RecipeCatalog::sample();
    };

    let display_path = path.display().to_string();
    let read = tokio::task::spawn_blocking(move || std::fs::read_to_string(path)).await;
    let content = match read {
        Ok(Ok(content)) => content,
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("catalog_service - {display_path} not found, using the built-in catalog");
            return RecipeCatalog::sample();
        }
        Ok(Err(e)) => {
            let e = CatalogError::from(e);
            log::warn!("catalog_service - {display_path}: {e}");
            alert_warn(format!("{e}. Katalog bawaan digunakan."));
            return RecipeCatalog::sample();
        }
        Err(e) => {
            log::error!("catalog_service - reading task failed: {e}");
            return RecipeCatalog::sample();
        }
    };

    match RecipeCatalog::from_json(&content) {
        Ok(catalog) => {
            log::info!("catalog_service - loaded {display_path}");
            catalog
        }
        Err(e) => {
            log::warn!("catalog_service - {display_path}: {e}");
            alert_warn(format!("{e}. Katalog bawaan digunakan."));
            RecipeCatalog::sample()
        }
    }
}
