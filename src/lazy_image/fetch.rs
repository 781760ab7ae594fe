use futures_util::future::LocalBoxFuture;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("could not load {uri}: {reason}")]
    Failed { uri: String, reason: String },
    #[error("could not schedule the fetch of {uri}")]
    NotScheduled { uri: String },
}

/// Retrieves a URI-addressable visual resource.
///
/// Success means the resource is ready to be displayed; the payload itself is
/// never handed back, the display layer references it by URI.
pub trait ResourceFetcher {
    fn fetch(&self, uri: &str) -> LocalBoxFuture<'static, Result<(), FetchError>>;
}
