//! Route definitions for the content resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Public routes mounted at `/content`.
///
/// ```text
/// GET /              -> get_all
/// GET /{section}     -> get_one
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::get_all))
        .route("/{section}", get(content::get_one))
}

/// Admin routes mounted at `/admin/content`.
///
/// ```text
/// PUT /{section}     -> update
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/{section}", put(content::update))
}
