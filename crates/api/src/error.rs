use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use brickside_content::error::{ContentError, MediaError};
use brickside_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain error types and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `brickside_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A content/versioning error.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// A media error.
    #[error(transparent)]
    Media(#[from] MediaError),

    /// A missing resource with a human-readable message.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Content(content) => match content {
                ContentError::VersionNotFound {
                    section,
                    version_id,
                } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Version not found: {version_id} for section '{section}'"),
                ),
                ContentError::SnapshotFailed(err) => {
                    tracing::error!(error = %err, "Snapshot failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "SNAPSHOT_FAILED",
                        "Failed to back up current content".to_string(),
                    )
                }
                ContentError::WriteFailed(err) => {
                    tracing::error!(error = %err, "Content write failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "WRITE_FAILED",
                        "Failed to write content".to_string(),
                    )
                }
                ContentError::Store(err) => {
                    tracing::error!(error = %err, "Store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Media(media) => match media {
                MediaError::Invalid(core) => classify_core_error(core),
                MediaError::NotFound { key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Image not found: {key}"),
                ),
                MediaError::Store(err) => {
                    tracing::error!(error = %err, "Store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
    }
}
