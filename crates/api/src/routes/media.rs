//! Route definitions for the image resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use brickside_core::media::MAX_IMAGE_SIZE_BYTES;

use crate::handlers::media;
use crate::state::AppState;

/// Request-body cap for uploads: the image size limit plus headroom
/// for the multipart framing and the folder field. Without this
/// override axum's 2 MiB default would reject images the validator
/// accepts.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_SIZE_BYTES as usize + 64 * 1024;

/// Routes mounted at `/admin/images`.
///
/// ```text
/// POST   /            -> upload (multipart)
/// GET    /            -> list   (?folder=images/hero)
/// DELETE /{key...}    -> delete (soft delete to trash)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(media::upload).get(media::list))
        .route("/{*key}", delete(media::delete))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
