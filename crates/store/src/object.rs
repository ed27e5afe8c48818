//! The [`ObjectStore`] trait and its value types.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::error::StoreError;

/// Metadata for one stored object.
///
/// Listings only carry `key`, `size`, and `last_modified`; the
/// remaining fields are populated by `get`/`head`/`put` (the S3 list
/// API does not return per-object headers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMeta {
    pub key: String,
    pub size: u64,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    /// User-defined key/value metadata attached at put time.
    pub custom: HashMap<String, String>,
    pub last_modified: DateTime<Utc>,
}

/// A stored object together with its body bytes.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub meta: ObjectMeta,
    pub body: Bytes,
}

/// Headers and metadata to attach on `put`.
#[derive(Debug, Clone, Default)]
pub struct PutOptions {
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub custom: HashMap<String, String>,
}

/// Cache TTL for immutable image blobs: one year.
pub const IMAGE_CACHE_TTL_SECONDS: u64 = 31_536_000;

impl PutOptions {
    /// Options for JSON documents: never cached (content edits must be
    /// visible immediately).
    pub fn json() -> Self {
        Self {
            content_type: Some("application/json".to_string()),
            cache_control: Some("no-cache".to_string()),
            custom: HashMap::new(),
        }
    }

    /// Options for uploaded images: long-lived immutable cache (keys
    /// embed a timestamp, so a re-upload never reuses a key).
    pub fn immutable_image(content_type: &str) -> Self {
        Self {
            content_type: Some(content_type.to_string()),
            cache_control: Some(format!(
                "public, max-age={IMAGE_CACHE_TTL_SECONDS}, immutable"
            )),
            custom: HashMap::new(),
        }
    }
}

/// Parameters for a `list` call.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    /// Key prefix to list under.
    pub prefix: String,
    /// When set, keys are grouped at the first occurrence of the
    /// delimiter past the prefix (S3 `CommonPrefixes` semantics).
    pub delimiter: Option<String>,
    /// Continuation cursor from a previous page.
    pub cursor: Option<String>,
}

/// One page of a listing. `cursor` is `Some` when more results remain.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    pub objects: Vec<ObjectMeta>,
    pub common_prefixes: Vec<String>,
    pub cursor: Option<String>,
}

/// Get/put/delete/list/head over keyed blobs.
///
/// Every call is a single network round trip with no retries; failures
/// surface immediately as [`StoreError`]. `put` is assumed atomic per
/// key (a collaborator-contract given for S3-compatible stores).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object with its body, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError>;

    /// Write (or overwrite) an object.
    async fn put(&self, key: &str, body: Bytes, options: PutOptions)
        -> Result<ObjectMeta, StoreError>;

    /// Delete the given keys. Deleting an absent key is not an error.
    async fn delete(&self, keys: &[String]) -> Result<(), StoreError>;

    /// List one page of keys under a prefix.
    async fn list(&self, request: &ListRequest) -> Result<ListPage, StoreError>;

    /// Fetch an object's metadata without its body, or `None` if absent.
    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>, StoreError>;
}
