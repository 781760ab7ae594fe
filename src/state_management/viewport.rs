use std::rc::Rc;

use dioxus::prelude::*;

use futures_util::stream::StreamExt;

use crate::lazy_image::prelude::{ProximityRegistry, Rect};

/// Position and size of the main scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    /// Client coordinates of the container's top-left corner
    pub origin_x: f64,
    pub origin_y: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}
impl ViewportGeometry {
    /// The currently visible part of the scrolled content
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }

    /// Converts a client rect into the content coordinates of the container
    pub fn to_content(&self, client: Rect) -> Rect {
        client.translate(self.scroll_x - self.origin_x, self.scroll_y - self.origin_y)
    }

    /// Same position and size, scroll offsets aside
    pub fn same_layout(&self, other: &ViewportGeometry) -> bool {
        self.origin_x == other.origin_x
            && self.origin_y == other.origin_y
            && self.width == other.width
            && self.height == other.height
    }
}

/// Last successful measurement of the main scroll container
pub static VIEWPORT: GlobalSignal<Option<ViewportGeometry>> = Signal::global(|| None);

/// Bumped whenever an element inside the scroll container changes size, which
/// may move everything laid out after it
pub static LAYOUT_REVISION: GlobalSignal<u64> = Signal::global(|| 0);

/// Layout an element region was measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredLayout {
    pub viewport: ViewportGeometry,
    pub revision: u64,
}
impl MeasuredLayout {
    /// Whether a region measured against `self` may have moved since
    pub fn is_stale(&self, viewport: &ViewportGeometry, revision: u64) -> bool {
        self.revision != revision || !self.viewport.same_layout(viewport)
    }
}

pub enum ViewportCommand {
    /// Re-measure the scroll container after a mount, scroll or resize
    Measure(Rc<MountedData>),
}
impl core::fmt::Debug for ViewportCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Measure(_) => f.debug_tuple("Measure").finish_non_exhaustive(),
        }
    }
}

pub(super) fn use_viewport_service(registry: ProximityRegistry) -> Coroutine<ViewportCommand> {
    use_coroutine(move |mut rx: UnboundedReceiver<ViewportCommand>| {
        let registry = registry.clone();
        async move {
            log::info!("viewport_service (coroutine) - start");

            while let Some(mut cmd) = rx.next().await {
                // Scroll events come in bursts, only the latest one matters
                while let Ok(Some(next)) = rx.try_next() {
                    cmd = next;
                }
                log::debug!("viewport_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    ViewportCommand::Measure(mounted) => match measure(&mounted).await {
                        Ok(geometry) => {
                            if VIEWPORT.peek().as_ref() != Some(&geometry) {
                                *VIEWPORT.write() = Some(geometry);
                            }
                            registry.set_viewport(geometry.visible_rect());
                        }
                        Err(e) => {
                            log::warn!("viewport_service (coroutine) - measure failed: {e}");
                            if VIEWPORT.peek().is_none() {
                                registry.mark_unsupported();
                            }
                        }
                    },
                }
                log::debug!("viewport_service (coroutine) - Command processed");
            }
        }
    })
}

async fn measure(mounted: &MountedData) -> Result<ViewportGeometry, String> {
    let rect = mounted
        .get_client_rect()
        .await
        .map_err(|e| format!("client rect: {e:?}"))?;
    let scroll = mounted
        .get_scroll_offset()
        .await
        .map_err(|e| format!("scroll offset: {e:?}"))?;
    Ok(ViewportGeometry {
        origin_x: rect.origin.x,
        origin_y: rect.origin.y,
        scroll_x: scroll.x,
        scroll_y: scroll.y,
        width: rect.size.width,
        height: rect.size.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rects_map_into_scrolled_content() {
        let geometry = ViewportGeometry {
            origin_x: 0.0,
            origin_y: 64.0,
            scroll_x: 0.0,
            scroll_y: 1000.0,
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(geometry.visible_rect(), Rect::new(0.0, 1000.0, 800.0, 600.0));
        // An element drawn right under the header is at the top of the visible content
        let element = geometry.to_content(Rect::new(10.0, 64.0, 100.0, 50.0));
        assert_eq!(element, Rect::new(10.0, 1000.0, 100.0, 50.0));
    }

    #[test]
    fn measured_layout_goes_stale_on_resize_not_on_scroll() {
        let viewport = ViewportGeometry {
            origin_x: 0.0,
            origin_y: 64.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
        let measured = MeasuredLayout {
            viewport,
            revision: 3,
        };

        let scrolled = ViewportGeometry {
            scroll_y: 400.0,
            ..viewport
        };
        assert!(!measured.is_stale(&scrolled, 3));

        // Content above the element changed size
        assert!(measured.is_stale(&scrolled, 4));

        let narrower = ViewportGeometry {
            width: 640.0,
            ..viewport
        };
        assert!(measured.is_stale(&narrower, 3));
    }
}
