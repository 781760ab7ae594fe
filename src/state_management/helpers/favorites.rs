use super::*;

pub fn toggle_favorite(favorites_service: Coroutine<FavoritesCommand>, recipe_id: CCStr) {
    log::debug!("toggle_favorite - {recipe_id}");
    favorites_service.send(FavoritesCommand::Toggle { recipe_id });
}

