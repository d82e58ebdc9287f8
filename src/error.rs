use std::error::Error as StdError;

/// Errors produced by the fan-out pipeline.
#[derive(Debug, thiserror::Error)]
pub enum BroadcastError {
    /// Error from the underlying stream-service client, propagated unchanged.
    ///
    /// The original error is preserved as the source so callers can downcast
    /// and inspect it (throttling, not-found, access-denied, ...).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// A request option that the batch-write API cannot honor.
    ///
    /// Silently dropping the option would give a false impression of the
    /// guarantees it provides, so the request is rejected instead.
    #[error("request option `{0}` is not supported by batched writes")]
    UnsupportedOption(&'static str),

    /// Pagination metadata was inconsistent: the service reported more shards
    /// but returned an empty page, leaving no cursor to resume from.
    #[error("describe returned an empty shard page for stream `{stream}` while reporting more shards")]
    InvalidPage { stream: String },
}

impl BroadcastError {
    /// Wrap a service-client error for verbatim propagation.
    pub fn transport(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Convenience alias used throughout the crate.
pub type BroadcastResult<T> = std::result::Result<T, BroadcastError>;
