//! Handlers for the admin version history and rollback endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use brickside_core::section::Section;
use brickside_core::version::{parse_version_id, VersionEntry};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/versions/{section}
///
/// The section's version entries, newest-first.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(section): Path<String>,
) -> AppResult<Json<DataResponse<Vec<VersionEntry>>>> {
    let section: Section = section.parse()?;
    let versions = state.content.versions().list_versions(section).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// GET /api/v1/admin/versions/{section}/{version_id}
///
/// Preview one snapshot's document without restoring it.
pub async fn get_content(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((section, version_id)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<Value>>> {
    let section: Section = section.parse()?;
    parse_version_id(&version_id)?;

    let document = state
        .content
        .versions()
        .get_version_content(section, &version_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Version not found: {version_id} for section '{section}'"
            ))
        })?;
    Ok(Json(DataResponse { data: document }))
}

/// Request body for the rollback endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackRequest {
    pub version_id: String,
    /// Optional note for the safety backup; defaults to
    /// "Rollback to version {id}".
    pub note: Option<String>,
}

/// Response payload for a successful rollback.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackResponse {
    pub section: Section,
    pub restored_version_id: String,
    /// Version id of the pre-rollback backup; `None` when the section
    /// had no live document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_version_id: Option<String>,
}

/// POST /api/v1/admin/versions/{section}/rollback
///
/// Restore a snapshot as the live document, backing up the current
/// document first.
pub async fn rollback(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(section): Path<String>,
    Json(request): Json<RollbackRequest>,
) -> AppResult<Json<DataResponse<RollbackResponse>>> {
    let section: Section = section.parse()?;
    parse_version_id(&request.version_id)?;

    let rollback = state
        .content
        .versions()
        .rollback_to_version(section, &request.version_id, &admin.email, request.note)
        .await?;
    tracing::info!(
        %section,
        restored = %rollback.restored_version_id,
        backup = ?rollback.backup_version_id,
        rolled_back_by = %admin.email,
        "Content rolled back"
    );

    Ok(Json(DataResponse {
        data: RollbackResponse {
            section,
            restored_version_id: rollback.restored_version_id,
            backup_version_id: rollback.backup_version_id,
        },
    }))
}
