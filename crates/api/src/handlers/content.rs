//! Handlers for public content reads and admin content updates.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use brickside_content::service::ContentUpdate;
use brickside_core::document::validate_document;
use brickside_core::section::Section;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/content
///
/// All sections' current documents, keyed by section name. Sections
/// that have never been written are omitted.
pub async fn get_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Map<String, Value>>>> {
    let all = state.content.get_all_content().await?;
    Ok(Json(DataResponse { data: all }))
}

/// GET /api/v1/content/{section}
///
/// One section's current document. 404 until the first write.
pub async fn get_one(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<Json<DataResponse<Value>>> {
    let section: Section = section.parse()?;
    let document = state
        .content
        .get_content(section)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No content for section '{section}'")))?;
    Ok(Json(DataResponse { data: document }))
}

/// PUT /api/v1/admin/content/{section}
///
/// Validate and replace a section's document. The previous document is
/// snapshotted as a version first (best effort).
pub async fn update(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(section): Path<String>,
    Json(document): Json<Value>,
) -> AppResult<Json<DataResponse<ContentUpdate>>> {
    let section: Section = section.parse()?;
    validate_document(section, &document)?;

    let update = state
        .content
        .update_content(section, &document, &admin.email)
        .await?;
    tracing::info!(
        %section,
        updated_by = %update.updated_by,
        version_created = ?update.version_created,
        "Content updated"
    );
    Ok(Json(DataResponse { data: update }))
}
