mod catalog;
mod clipboard;
mod config;
mod favorites;
mod helpers;
mod image_fetch;
mod viewport;

use dioxus::prelude::*;

use crate::lazy_image::prelude::ProximityRegistry;

pub fn use_init_services() {
    log::debug!("init_services - start");
    let registry = use_context_provider(ProximityRegistry::new);
    let _ = viewport::use_viewport_service(registry);
    let _ = image_fetch::use_image_fetch_service();
    let _ = catalog::use_catalog_service();
    let _ = favorites::use_favorites_service();
    let _ = clipboard::use_clipboard_service();
    log::debug!("init_services - finished");
}

pub mod prelude {
    pub use super::image_fetch::{DioxusSpawner, ImageFetchClient};
    pub use super::viewport::{MeasuredLayout, ViewportCommand};

    pub mod state_management {
        pub use super::super::catalog::CATALOG_REVISION;
        pub use super::super::config::APP_CONFIG;
        pub use super::super::favorites::FAVORITES;
        pub use super::super::helpers::*;
        pub use super::super::viewport::{LAYOUT_REVISION, VIEWPORT};
    }
}
