use std::collections::BTreeSet;

use dioxus::prelude::*;

use futures_util::stream::StreamExt;

use crate::utils::CCStr;

/// Ids of the recipes marked as favorite during this session
pub static FAVORITES: GlobalSignal<BTreeSet<CCStr>> = Signal::global(BTreeSet::new);

#[derive(Debug)]
pub enum FavoritesCommand {
    Toggle { recipe_id: CCStr },
}

pub(super) fn use_favorites_service() -> Coroutine<FavoritesCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<FavoritesCommand>| async move {
            log::info!("favorites_service (coroutine) - start");

            while let Some(cmd) = rx.next().await {
                log::debug!("favorites_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    FavoritesCommand::Toggle { recipe_id } => {
                        let mut favorites = FAVORITES.write();
                        if !favorites.remove(&recipe_id) {
                            favorites.insert(recipe_id);
                        }
                    }
                }
                log::debug!("favorites_service (coroutine) - Command processed");
            }
        },
    )
}
