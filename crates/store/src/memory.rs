//! In-memory [`ObjectStore`] used by unit and integration tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::object::{ListPage, ListRequest, ObjectMeta, ObjectStore, PutOptions, StoredObject};

/// Maximum raw keys examined per `list` page, mirroring the S3 default.
const LIST_PAGE_SIZE: usize = 1000;

/// A `BTreeMap`-backed store. Keys iterate in lexical order, matching
/// S3 listing semantics; the list cursor is the last examined key
/// (start-after semantics).
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, StoredObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects, for test assertions.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        Ok(self.objects.read().await.get(key).cloned())
    }

    async fn put(
        &self,
        key: &str,
        body: Bytes,
        options: PutOptions,
    ) -> Result<ObjectMeta, StoreError> {
        let meta = ObjectMeta {
            key: key.to_string(),
            size: body.len() as u64,
            content_type: options.content_type,
            cache_control: options.cache_control,
            custom: options.custom,
            last_modified: Utc::now(),
        };
        self.objects.write().await.insert(
            key.to_string(),
            StoredObject {
                meta: meta.clone(),
                body,
            },
        );
        Ok(meta)
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        let mut objects = self.objects.write().await;
        for key in keys {
            objects.remove(key);
        }
        Ok(())
    }

    async fn list(&self, request: &ListRequest) -> Result<ListPage, StoreError> {
        let objects = self.objects.read().await;
        let mut page = ListPage::default();
        let mut examined = 0usize;
        let mut last_key: Option<String> = None;
        let mut truncated = false;

        for (key, stored) in objects.range(request.prefix.clone()..) {
            if !key.starts_with(&request.prefix) {
                break;
            }
            // Start-after cursor semantics.
            if let Some(ref cursor) = request.cursor {
                if key.as_str() <= cursor.as_str() {
                    continue;
                }
            }
            if examined >= LIST_PAGE_SIZE {
                truncated = true;
                break;
            }
            examined += 1;
            last_key = Some(key.clone());

            if let Some(ref delimiter) = request.delimiter {
                let rest = &key[request.prefix.len()..];
                if let Some(pos) = rest.find(delimiter.as_str()) {
                    let group = format!(
                        "{}{}",
                        request.prefix,
                        &rest[..pos + delimiter.len()]
                    );
                    if !page.common_prefixes.contains(&group) {
                        page.common_prefixes.push(group);
                    }
                    continue;
                }
            }
            page.objects.push(stored.meta.clone());
        }

        page.cursor = if truncated { last_key } else { None };
        Ok(page)
    }

    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>, StoreError> {
        Ok(self.objects.read().await.get(key).map(|o| o.meta.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::new()
    }

    #[tokio::test]
    async fn put_then_get_returns_same_bytes() {
        let store = store();
        store
            .put("a/b.json", Bytes::from_static(b"{\"x\":1}"), PutOptions::json())
            .await
            .unwrap();

        let got = store.get("a/b.json").await.unwrap().unwrap();
        assert_eq!(&got.body[..], b"{\"x\":1}");
        assert_eq!(got.meta.content_type.as_deref(), Some("application/json"));
        assert_eq!(got.meta.size, 7);
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        assert!(store().get("nope").await.unwrap().is_none());
        assert!(store().head("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_keys_and_tolerates_missing() {
        let store = store();
        store
            .put("k1", Bytes::from_static(b"1"), PutOptions::default())
            .await
            .unwrap();
        store
            .delete(&["k1".to_string(), "k2".to_string()])
            .await
            .unwrap();
        assert!(store.get("k1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_filters_by_prefix() {
        let store = store();
        for key in ["images/a.png", "images/b.png", "content/hero.json"] {
            store
                .put(key, Bytes::from_static(b"x"), PutOptions::default())
                .await
                .unwrap();
        }

        let page = store
            .list(&ListRequest {
                prefix: "images/".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let keys: Vec<_> = page.objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["images/a.png", "images/b.png"]);
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn list_with_delimiter_groups_folders() {
        let store = store();
        for key in [
            "images/hero/1.png",
            "images/hero/2.png",
            "images/gallery/3.png",
            "images/top.png",
        ] {
            store
                .put(key, Bytes::from_static(b"x"), PutOptions::default())
                .await
                .unwrap();
        }

        let page = store
            .list(&ListRequest {
                prefix: "images/".to_string(),
                delimiter: Some("/".to_string()),
                cursor: None,
            })
            .await
            .unwrap();

        assert_eq!(
            page.common_prefixes,
            vec!["images/gallery/".to_string(), "images/hero/".to_string()]
        );
        let keys: Vec<_> = page.objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["images/top.png"]);
    }

    #[tokio::test]
    async fn overwrite_replaces_body_and_metadata() {
        let store = store();
        store
            .put("k", Bytes::from_static(b"old"), PutOptions::default())
            .await
            .unwrap();
        store
            .put("k", Bytes::from_static(b"newer"), PutOptions::json())
            .await
            .unwrap();

        let got = store.get("k").await.unwrap().unwrap();
        assert_eq!(&got.body[..], b"newer");
        assert_eq!(got.meta.size, 5);
    }
}
