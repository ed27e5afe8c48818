//! Shared test support: an in-memory store whose puts or deletes can be
//! made to fail for a key prefix, to exercise partial-failure paths.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use brickside_store::{
    ListPage, ListRequest, MemoryStore, ObjectMeta, ObjectStore, PutOptions, StoreError,
    StoredObject,
};

pub struct FailingStore {
    inner: MemoryStore,
    fail_put_prefix: Mutex<Option<String>>,
    fail_delete_prefix: Mutex<Option<String>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_put_prefix: Mutex::new(None),
            fail_delete_prefix: Mutex::new(None),
        }
    }

    /// Make every subsequent put under `prefix` fail.
    pub fn fail_puts_under(&self, prefix: &str) {
        *self.fail_put_prefix.lock().unwrap() = Some(prefix.to_string());
    }

    /// Make every subsequent delete touching a key under `prefix` fail.
    pub fn fail_deletes_under(&self, prefix: &str) {
        *self.fail_delete_prefix.lock().unwrap() = Some(prefix.to_string());
    }

    /// Stop injecting failures.
    pub fn heal(&self) {
        *self.fail_put_prefix.lock().unwrap() = None;
        *self.fail_delete_prefix.lock().unwrap() = None;
    }

    fn should_fail_put(&self, key: &str) -> bool {
        self.fail_put_prefix
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|prefix| key.starts_with(prefix))
    }

    fn should_fail_delete(&self, keys: &[String]) -> bool {
        self.fail_delete_prefix
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|prefix| keys.iter().any(|key| key.starts_with(prefix)))
    }
}

#[async_trait]
impl ObjectStore for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        self.inner.get(key).await
    }

    async fn put(
        &self,
        key: &str,
        body: Bytes,
        options: PutOptions,
    ) -> Result<ObjectMeta, StoreError> {
        if self.should_fail_put(key) {
            return Err(StoreError::Backend(format!("injected put failure: {key}")));
        }
        self.inner.put(key, body, options).await
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        if self.should_fail_delete(keys) {
            return Err(StoreError::Backend(format!(
                "injected delete failure: {}",
                keys.join(", ")
            )));
        }
        self.inner.delete(keys).await
    }

    async fn list(&self, request: &ListRequest) -> Result<ListPage, StoreError> {
        self.inner.list(request).await
    }

    async fn head(&self, key: &str) -> Result<Option<ObjectMeta>, StoreError> {
        self.inner.head(key).await
    }
}
