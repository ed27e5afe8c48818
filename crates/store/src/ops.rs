//! Common operations layered on the [`ObjectStore`] trait.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use brickside_core::keys::{trash_key, IMAGES_PREFIX};
use brickside_core::media::has_allowed_extension;

use crate::error::StoreError;
use crate::object::{ListRequest, ObjectMeta, ObjectStore, PutOptions};

/// Read and decode a JSON document, or `None` if the key is absent.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn ObjectStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(object) => serde_json::from_slice(&object.body)
            .map(Some)
            .map_err(|source| StoreError::Json {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Serialize and write a JSON document with no-cache headers.
pub async fn write_json<T: Serialize>(
    store: &dyn ObjectStore,
    key: &str,
    value: &T,
) -> Result<ObjectMeta, StoreError> {
    let body = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
        key: key.to_string(),
        source,
    })?;
    store.put(key, Bytes::from(body), PutOptions::json()).await
}

/// True when an object exists at `key` (head, no body transfer).
pub async fn exists(store: &dyn ObjectStore, key: &str) -> Result<bool, StoreError> {
    Ok(store.head(key).await?.is_some())
}

/// Copy an object byte-for-byte, preserving its headers and custom
/// metadata. Returns `None` when the source is absent.
pub async fn copy_object(
    store: &dyn ObjectStore,
    source_key: &str,
    destination_key: &str,
) -> Result<Option<ObjectMeta>, StoreError> {
    let Some(source) = store.get(source_key).await? else {
        return Ok(None);
    };
    let options = PutOptions {
        content_type: source.meta.content_type,
        cache_control: source.meta.cache_control,
        custom: source.meta.custom,
    };
    let meta = store.put(destination_key, source.body, options).await?;
    Ok(Some(meta))
}

/// Soft-delete an object by copying it under the trash prefix (with
/// the original key and deletion time recorded as custom metadata) and
/// then deleting the original. Returns the trash key.
///
/// Trash has no retention bound and no automatic purge, unlike the
/// version index.
pub async fn soft_delete(
    store: &dyn ObjectStore,
    key: &str,
    at: DateTime<Utc>,
) -> Result<String, StoreError> {
    let Some(object) = store.get(key).await? else {
        return Err(StoreError::NotFound {
            key: key.to_string(),
        });
    };

    let destination = trash_key(key, at);
    let mut options = PutOptions {
        content_type: object.meta.content_type,
        cache_control: object.meta.cache_control,
        custom: object.meta.custom,
    };
    options
        .custom
        .insert("original-key".to_string(), key.to_string());
    options
        .custom
        .insert("deleted-at".to_string(), at.to_rfc3339());

    store.put(&destination, object.body, options).await?;
    store.delete(&[key.to_string()]).await?;
    Ok(destination)
}

/// List all image objects under `prefix` (defaults to the whole
/// `images/` tree), walking every page and filtering to allowed image
/// extensions.
pub async fn list_images(
    store: &dyn ObjectStore,
    prefix: Option<&str>,
) -> Result<Vec<ObjectMeta>, StoreError> {
    let prefix = match prefix {
        Some(p) => format!("{p}/"),
        None => format!("{IMAGES_PREFIX}/"),
    };

    let mut images = Vec::new();
    let mut cursor = None;
    loop {
        let page = store
            .list(&ListRequest {
                prefix: prefix.clone(),
                delimiter: None,
                cursor,
            })
            .await?;
        images.extend(
            page.objects
                .into_iter()
                .filter(|meta| has_allowed_extension(&meta.key)),
        );
        match page.cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    Ok(images)
}

/// List the folder prefixes directly under `images/` (one delimiter
/// level), without trailing slashes.
pub async fn list_image_folders(store: &dyn ObjectStore) -> Result<Vec<String>, StoreError> {
    let page = store
        .list(&ListRequest {
            prefix: format!("{IMAGES_PREFIX}/"),
            delimiter: Some("/".to_string()),
            cursor: None,
        })
        .await?;

    Ok(page
        .common_prefixes
        .into_iter()
        .map(|p| p.trim_end_matches('/').to_string())
        .collect())
}
