#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An operation that requires the object to exist found nothing at
    /// the key.
    #[error("Object not found: {key}")]
    NotFound { key: String },

    /// The storage backend rejected or failed the call.
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// A stored blob could not be decoded as the expected JSON shape.
    #[error("Invalid JSON object at {key}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
