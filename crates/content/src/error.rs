use brickside_core::error::CoreError;
use brickside_core::section::Section;
use brickside_store::StoreError;

/// Failures of the versioning core and content service.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No snapshot exists for the requested version id.
    #[error("Version not found: {version_id} for section '{section}'")]
    VersionNotFound {
        section: Section,
        version_id: String,
    },

    /// Copying the current document into a snapshot blob failed.
    ///
    /// Non-fatal when triggered as the pre-write safety snapshot
    /// (callers log and proceed); fatal when triggered as the
    /// mandatory pre-rollback backup.
    #[error("Failed to snapshot current content: {0}")]
    SnapshotFailed(#[source] StoreError),

    /// The final overwrite (content update or rollback copy) failed.
    /// Always fatal.
    #[error("Failed to write content: {0}")]
    WriteFailed(#[source] StoreError),

    /// Any other store failure (index reads/writes, content reads).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the media service.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The upload or key failed validation.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// No image exists at the key.
    #[error("Image not found: {key}")]
    NotFound { key: String },

    /// The storage backend failed.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for MediaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key } => Self::NotFound { key },
            other => Self::Store(other),
        }
    }
}
