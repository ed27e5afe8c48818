pub mod content;
pub mod health;
pub mod media;
pub mod versions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content                                  all sections (public)
/// /content/{section}                        one section (public)
///
/// /admin/content/{section}                  update (PUT)
///
/// /admin/versions/{section}                 list versions
/// /admin/versions/{section}/{version_id}    snapshot preview
/// /admin/versions/{section}/rollback        rollback (POST)
///
/// /admin/images                             upload (POST), list (GET)
/// /admin/images/{key...}                    soft delete (DELETE)
/// ```
///
/// Everything under `/admin` requires the access-proxy header (the
/// handlers take an `AdminUser` extractor).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/content", content::public_router())
        .nest("/admin/content", content::admin_router())
        .nest("/admin/versions", versions::router())
        .nest("/admin/images", media::router())
}
