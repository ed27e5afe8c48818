//! Access-proxy authentication extractor for Axum handlers.
//!
//! The deployment sits behind an authenticating proxy (Cloudflare
//! Access) that injects the caller's verified email into the
//! `cf-access-authenticated-user-email` header. Admin handlers extract
//! [`AdminUser`] to require that header; the public content routes do
//! not use it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use brickside_core::auth::validate_admin_email;
use brickside_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header set by the access proxy after authenticating the user.
pub const AUTH_EMAIL_HEADER: &str = "cf-access-authenticated-user-email";

/// Authenticated admin extracted from the access-proxy header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(email = %admin.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The proxy-verified email, recorded as the author of edits.
    pub email: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(AUTH_EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing authentication header".into(),
                ))
            })?;

        validate_admin_email(email)?;

        Ok(AdminUser {
            email: email.to_string(),
        })
    }
}
