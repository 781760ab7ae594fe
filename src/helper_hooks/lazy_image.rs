use crate::prelude::*;

use std::rc::Rc;

use crate::{
    lazy_image::prelude::*,
    state_management::prelude::{DioxusSpawner, ImageFetchClient, MeasuredLayout},
    utils::CCStr,
};

/// Stand-in used when no [ProximityRegistry] was provided, which makes every
/// loader fall back to loading eagerly
struct NoProximityWatcher;
impl ProximityWatcher for NoProximityWatcher {
    fn observe(
        &self,
        _region: Rect,
        _config: ProximityConfig,
        _on_near: NearCallback,
    ) -> Result<ObservationId, RegistrationError> {
        Err(RegistrationError::Unavailable)
    }

    fn unobserve(&self, _id: ObservationId) {}
}

/// Region of the mounted element in the content coordinates of the main
/// scroll container.
///
/// An element that cannot be measured is placed over the visible viewport.
async fn measure_region(mounted: &MountedData) -> Rect {
    let viewport = *state_management::VIEWPORT.peek();
    match mounted.get_client_rect().await {
        Ok(rect) => {
            let client = Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
            viewport.map(|g| g.to_content(client)).unwrap_or(client)
        }
        Err(e) => {
            log::warn!("measure_region - cannot measure the image element: {e:?}");
            viewport.map(|g| g.visible_rect()).unwrap_or_default()
        }
    }
}

fn current_layout() -> Option<MeasuredLayout> {
    (*state_management::VIEWPORT.peek()).map(|viewport| MeasuredLayout {
            viewport,
            revision: *state_management::LAYOUT_REVISION.peek(),
        })
}

/// Handlers to attach to the element displaying a lazy image
#[derive(Clone, Copy)]
pub struct LazyImageEvents {
    pub on_mounted: Callback<MountedEvent>,
    pub on_resize: Callback<ResizeEvent>,
}

/// Binds a [DeferredLoader] to the lifecycle of the calling component.
///
/// Returns the state to render and the handlers for the element displaying it.
pub fn use_lazy_image(
    target_uri: ReadOnlySignal<CCStr>,
    alt_text: CCStr,
    placeholder_uri: Option<CCStr>,
    on_loaded: Option<EventHandler<()>>,
) -> (Signal<LoaderState>, LazyImageEvents) {
    let image_fetch_service = state_management::use_image_fetch_service();

    let loader = use_hook(move || {
        let watcher: Rc<dyn ProximityWatcher> = match try_consume_context::<ProximityRegistry>()
        {
            Some(registry) => Rc::new(registry),
            None => {
                log::warn!("use_lazy_image - no proximity registry in context");
                Rc::new(NoProximityWatcher)
            }
        };
        let mut options = LoaderOptions::new(target_uri.peek().to_string(), alt_text.to_string())
            .with_proximity(state_management::APP_CONFIG.peek().proximity);
        if let Some(placeholder_uri) = placeholder_uri {
            options = options.with_placeholder(placeholder_uri.to_string());
        }
        if let Some(on_loaded) = on_loaded {
            options = options.with_on_loaded(move || on_loaded.call(()));
        }
        Rc::new(DeferredLoader::new(
            options,
            watcher,
            Rc::new(ImageFetchClient::new(image_fetch_service)),
            Rc::new(DioxusSpawner),
        ))
    });

    let state = use_signal({
        let loader = loader.clone();
        move || loader.state()
    });
    use_hook({
        let loader = loader.clone();
        move || {
            loader.set_listener(move |new_state| {
                let mut state = state;
                state.set(new_state.clone());
            })
        }
    });

    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let mut measured_with = use_signal(|| None::<MeasuredLayout>);

    let on_mounted = use_callback({
        let loader = loader.clone();
        move |event: MountedEvent| {
            let element = event.data();
            mounted.set(Some(element.clone()));
            let loader = loader.clone();
            spawn(async move {
                let region = measure_region(&element).await;
                measured_with.set(current_layout());
                let target = target_uri.peek().to_string();
                if loader.target_uri() != target {
                    loader.on_target_changed(target, region);
                } else if loader.phase() == LoaderPhase::Idle {
                    loader.on_create(region);
                }
            });
        }
    });

    // A new target restarts the loader, once the element is mounted
    use_effect({
        let loader = loader.clone();
        move || {
            let target = target_uri.read().to_string();
            if loader.target_uri() == target {
                return;
            }
            let Some(element) = mounted.peek().clone() else {
                return;
            };
            let loader = loader.clone();
            spawn(async move {
                let region = measure_region(&element).await;
                loader.on_target_changed(target, region);
            });
        }
    });

    // Any element resizing may shift the content below it
    let on_resize = use_callback(move |_: ResizeEvent| {
        *state_management::LAYOUT_REVISION.write() += 1;
    });

    // Layout changes of the scroll container or of its content move the
    // observed region
    use_effect({
        let loader = loader.clone();
        move || {
            let Some(viewport) = state_management::VIEWPORT() else {
                return;
            };
            let revision = state_management::LAYOUT_REVISION();
            if loader.phase() != LoaderPhase::Observing {
                return;
            }
            if measured_with
                .peek()
                .as_ref()
                .is_some_and(|previous| !previous.is_stale(&viewport, revision))
            {
                return;
            }
            let Some(element) = mounted.peek().clone() else {
                return;
            };
            let loader = loader.clone();
            spawn(async move {
                let region = measure_region(&element).await;
                measured_with.set(Some(MeasuredLayout { viewport, revision }));
                loader.on_region_changed(region);
            });
        }
    });

    use_drop(move || loader.on_destroy());

    (
        state,
        LazyImageEvents {
            on_mounted,
            on_resize,
        },
    )
}
