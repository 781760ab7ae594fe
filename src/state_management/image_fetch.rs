use std::{cell::RefCell, collections::HashSet, rc::Rc};

use dioxus::prelude::*;

use futures_util::{
    future::{LocalBoxFuture, LocalFutureObj},
    stream::StreamExt,
    task::{LocalSpawn, SpawnError},
    FutureExt,
};
use tokio::sync::oneshot;

use crate::lazy_image::prelude::{FetchError, ResourceFetcher};

pub enum ImageFetchCommand {
    /// Make sure `uri` is decoded by the webview and ready to be displayed
    Preload {
        uri: String,
        result: oneshot::Sender<Result<(), FetchError>>,
    },
}
impl core::fmt::Debug for ImageFetchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preload { uri, .. } => f
                .debug_struct("Preload")
                .field("uri", uri)
                .finish_non_exhaustive(),
        }
    }
}

pub(super) fn use_image_fetch_service() -> Coroutine<ImageFetchCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<ImageFetchCommand>| async move {
            log::info!("image_fetch_service (coroutine) - start");

            // URIs already preloaded once; the webview serves them from its cache
            let loaded: Rc<RefCell<HashSet<String>>> = Rc::default();

            while let Some(cmd) = rx.next().await {
                log::debug!("image_fetch_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    ImageFetchCommand::Preload { uri, result } => {
                        if loaded.borrow().contains(&uri) {
                            let _ = result.send(Ok(()));
                            continue;
                        }
                        let loaded = loaded.clone();
                        spawn(async move {
                            let outcome = preload_in_webview(&uri).await;
                            if outcome.is_ok() {
                                loaded.borrow_mut().insert(uri);
                            }
                            // The requester may be gone already
                            let _ = result.send(outcome);
                        });
                    }
                }
                log::debug!("image_fetch_service (coroutine) - Command processed");
            }
        },
    )
}

async fn preload_in_webview(uri: &str) -> Result<(), FetchError> {
    log::debug!("preload_in_webview - start {uri}");
    let failed = |reason: String| FetchError::Failed {
        uri: uri.to_owned(),
        reason,
    };
    let js_uri = serde_json::to_string(uri).map_err(|e| failed(e.to_string()))?;
    let script = format!(
        r#"return await new Promise((resolve) => {{
            const img = new Image();
            img.onload = () => resolve(true);
            img.onerror = () => resolve(false);
            img.src = {js_uri};
        }});"#
    );
    let loaded = document::eval(&script)
        .join::<bool>()
        .await
        .map_err(|e| failed(format!("{e:?}")))?;
    log::debug!("preload_in_webview - finished {uri} (loaded: {loaded})");
    if loaded {
        Ok(())
    } else {
        Err(failed("the image could not be decoded".to_owned()))
    }
}

/// [ResourceFetcher] backed by the image fetch service
#[derive(Clone, Copy)]
pub struct ImageFetchClient(Coroutine<ImageFetchCommand>);
impl ImageFetchClient {
    pub fn new(service: Coroutine<ImageFetchCommand>) -> Self {
        Self(service)
    }
}
impl ResourceFetcher for ImageFetchClient {
    fn fetch(&self, uri: &str) -> LocalBoxFuture<'static, Result<(), FetchError>> {
        let (result, rx) = oneshot::channel();
        self.0.send(ImageFetchCommand::Preload {
            uri: uri.to_owned(),
            result,
        });
        let uri = uri.to_owned();
        async move {
            rx.await.unwrap_or_else(|_| {
                Err(FetchError::Failed {
                    uri,
                    reason: "image fetch service stopped".to_owned(),
                })
            })
        }
        .boxed_local()
    }
}

/// Runs futures on the Dioxus runtime, detached from any component scope
#[derive(Debug, Clone, Copy, Default)]
pub struct DioxusSpawner;
impl LocalSpawn for DioxusSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        spawn_forever(future)
            .map(|_| ())
            .ok_or_else(SpawnError::shutdown)
    }
}
