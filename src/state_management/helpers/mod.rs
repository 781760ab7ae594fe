mod catalog;
mod clipboard;
mod favorites;

use dioxus::prelude::*;

use tokio::sync::oneshot;

use crate::utils::{log_error_ccstr, CCStr};

use super::{
    catalog::CatalogCommand, clipboard::ClipboardCommand, favorites::FavoritesCommand,
    image_fetch::ImageFetchCommand, viewport::ViewportCommand,
};

pub use catalog::*;
pub use clipboard::*;
pub use favorites::*;

pub fn use_catalog_service() -> Coroutine<CatalogCommand> {
    use_coroutine_handle()
}

pub fn use_clipboard_service() -> Coroutine<ClipboardCommand> {
    use_coroutine_handle()
}

pub fn use_favorites_service() -> Coroutine<FavoritesCommand> {
    use_coroutine_handle()
}

pub fn use_image_fetch_service() -> Coroutine<ImageFetchCommand> {
    use_coroutine_handle()
}

pub fn use_viewport_service() -> Coroutine<ViewportCommand> {
    use_coroutine_handle()
}

/// Awaits a service reply, turning a vanished service into a logged error
async fn service_reply<T>(rx: oneshot::Receiver<T>, service_name: &str) -> Result<T, CCStr> {
    rx.await
        .map_err(|_| log_error_ccstr(format!("{service_name} stopped unexpectedly")))
}
