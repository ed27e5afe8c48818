//! Route definitions for the version history resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::versions;
use crate::state::AppState;

/// Routes mounted at `/admin/versions`.
///
/// ```text
/// GET  /{section}                -> list
/// GET  /{section}/{version_id}   -> get_content
/// POST /{section}/rollback       -> rollback
/// ```
///
/// axum matches the literal `rollback` segment before the
/// `{version_id}` capture, so a version id can never shadow the
/// rollback route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{section}", get(versions::list))
        .route("/{section}/rollback", post(versions::rollback))
        .route("/{section}/{version_id}", get(versions::get_content))
}
