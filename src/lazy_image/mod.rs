//! # Lazy image loading
//!
//! Framework-independent core of the viewport-triggered image loader.
//!
//! A [DeferredLoader](loader::DeferredLoader) is created per displayed image.
//! It registers the image region with a shared
//! [ProximityWatcher](watcher::ProximityWatcher), waits until the region comes
//! within [ProximityConfig](proximity::ProximityConfig) of the viewport, then
//! asks a [ResourceFetcher](fetch::ResourceFetcher) for the final resource and
//! swaps the placeholder for it on success. Failures keep the placeholder.
//!
//! The Dioxus binding lives in `helper_hooks::use_lazy_image` and the rendered
//! component in `components::lazy_image`.

pub mod fetch;
pub mod loader;
pub mod proximity;
pub mod watcher;

pub mod prelude {
    pub use super::fetch::{FetchError, ResourceFetcher};
    pub use super::loader::{
        DeferredLoader, LoaderOptions, LoaderPhase, LoaderState, DEFAULT_PLACEHOLDER_URI,
    };
    pub use super::proximity::{ProximityConfig, Rect};
    pub use super::watcher::{
        NearCallback, ObservationId, ProximityRegistry, ProximityWatcher, RegistrationError,
    };
}
