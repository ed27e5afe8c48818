//! Image uploads, listing, and soft deletion.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use brickside_core::error::CoreError;
use brickside_core::keys::image_key;
use brickside_core::media::{is_image_key, validate_image, ImageFolder};
use brickside_store::{ops, ObjectStore, PutOptions};

use crate::error::MediaError;

/// A successfully uploaded image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub key: String,
    pub url: String,
    pub size: u64,
    pub content_type: String,
}

/// One image in a listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub key: String,
    pub url: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// An image listing with the available folders.
#[derive(Debug, Clone, Serialize)]
pub struct ImageListing {
    pub images: Vec<ImageItem>,
    pub total: usize,
    pub folders: Vec<String>,
}

pub struct MediaService {
    store: Arc<dyn ObjectStore>,
    /// Public base URL of the bucket, used to build delivery URLs.
    public_base_url: String,
}

impl MediaService {
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }

    /// Validate and store an uploaded image under a timestamped key
    /// with immutable cache headers.
    pub async fn upload_image(
        &self,
        folder: ImageFolder,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<UploadedImage, MediaError> {
        validate_image(data.len() as u64, content_type, filename)?;

        let key = image_key(folder.as_prefix(), filename, Utc::now());
        let meta = self
            .store
            .put(&key, data, PutOptions::immutable_image(content_type))
            .await?;

        Ok(UploadedImage {
            url: self.public_url(&key),
            key,
            size: meta.size,
            content_type: content_type.to_string(),
        })
    }

    /// List images (optionally one folder) plus the folder prefixes
    /// present under `images/`.
    pub async fn list_images(&self, folder: Option<ImageFolder>) -> Result<ImageListing, MediaError> {
        let images = ops::list_images(
            self.store.as_ref(),
            folder.map(|f| f.as_prefix()),
        )
        .await?;
        let folders = ops::list_image_folders(self.store.as_ref()).await?;

        let images: Vec<ImageItem> = images
            .into_iter()
            .map(|meta| ImageItem {
                url: self.public_url(&meta.key),
                key: meta.key,
                size: meta.size,
                last_modified: meta.last_modified,
            })
            .collect();

        Ok(ImageListing {
            total: images.len(),
            images,
            folders,
        })
    }

    /// Soft-delete an image into the trash prefix. Only image keys may
    /// be deleted through this path. Returns the trash key.
    pub async fn delete_image(&self, key: &str) -> Result<String, MediaError> {
        if !is_image_key(key) {
            return Err(MediaError::Invalid(CoreError::Validation(
                "Invalid image key - must be in the images folder".into(),
            )));
        }
        Ok(ops::soft_delete(self.store.as_ref(), key, Utc::now()).await?)
    }
}
