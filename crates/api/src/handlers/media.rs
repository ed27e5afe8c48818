//! Handlers for the admin image endpoints.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use serde::Deserialize;

use brickside_content::media::{ImageListing, UploadedImage};
use brickside_core::media::ImageFolder;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the image listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    /// Optional folder filter in prefix form (e.g. `images/gallery`).
    pub folder: Option<String>,
}

/// POST /api/v1/admin/images
///
/// Multipart upload with a `file` part (binary, with filename and
/// content type) and a `folder` part (prefix form, e.g. `images/hero`).
pub async fn upload(
    State(state): State<AppState>,
    admin: AdminUser,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<UploadedImage>>> {
    let mut file: Option<(String, String, bytes::Bytes)> = None;
    let mut folder: Option<ImageFolder> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::BadRequest("Missing filename".into()))?
                    .to_string();
                let content_type = field
                    .content_type()
                    .ok_or_else(|| AppError::BadRequest("Missing content type".into()))?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;
                file = Some((filename, content_type, data));
            }
            Some("folder") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read folder: {e}")))?;
                folder = Some(value.parse()?);
            }
            _ => {}
        }
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' part".into()))?;
    let folder = folder.ok_or_else(|| AppError::BadRequest("Missing 'folder' part".into()))?;

    let uploaded = state
        .media
        .upload_image(folder, &filename, &content_type, data)
        .await?;
    tracing::info!(
        key = %uploaded.key,
        size = uploaded.size,
        uploaded_by = %admin.email,
        "Image uploaded"
    );
    Ok(Json(DataResponse { data: uploaded }))
}

/// GET /api/v1/admin/images
///
/// List uploaded images, optionally filtered to one folder, plus the
/// folder prefixes in use.
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<ImageQuery>,
) -> AppResult<Json<DataResponse<ImageListing>>> {
    let folder = params
        .folder
        .as_deref()
        .map(str::parse::<ImageFolder>)
        .transpose()?;
    let listing = state.media.list_images(folder).await?;
    Ok(Json(DataResponse { data: listing }))
}

/// DELETE /api/v1/admin/images/{key...}
///
/// Soft-delete an image into the trash prefix.
pub async fn delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let trash_key = state.media.delete_image(&key).await?;
    tracing::info!(%key, %trash_key, deleted_by = %admin.email, "Image soft-deleted");
    Ok(Json(DataResponse {
        data: serde_json::json!({
            "deleted": true,
            "key": key,
            "trashKey": trash_key,
        }),
    }))
}
