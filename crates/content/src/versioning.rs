//! The version manager: bounded per-section snapshot history with
//! copy-based rollback.
//!
//! Every content overwrite is preceded by a snapshot of the live
//! document; the per-section index keeps the newest
//! [`MAX_VERSIONS_PER_SECTION`] entries and deletes evicted snapshot
//! blobs. Rollback backs up the live document first, so the
//! immediately-prior state is always recoverable as a version.
//!
//! The index is a single JSON blob read-modify-written per call with
//! no compare-and-swap: two concurrent writers to the same section can
//! lose an index entry (last write wins). Accepted for single-admin
//! usage.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use brickside_core::keys::{content_key, version_index_key, version_key};
use brickside_core::section::Section;
use brickside_core::version::{
    generate_version_id, VersionEntry, VersionIndex, MAX_VERSIONS_PER_SECTION,
};
use brickside_store::{ops, ObjectStore, StoreError};

use crate::error::ContentError;

/// Default note attached to the backup created at the start of a
/// rollback, when the caller supplies none.
fn rollback_note(version_id: &str) -> String {
    format!("Rollback to version {version_id}")
}

/// Result of a successful rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollback {
    /// The version whose snapshot now is the live document.
    pub restored_version_id: String,
    /// The backup of the pre-rollback live document, if one existed.
    pub backup_version_id: Option<String>,
}

pub struct VersionManager {
    store: Arc<dyn ObjectStore>,
}

impl VersionManager {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Load a section's version index, creating (and persisting) an
    /// empty one on first access.
    async fn load_index(&self, section: Section) -> Result<VersionIndex, ContentError> {
        let key = version_index_key(section);
        if let Some(index) = ops::read_json::<VersionIndex>(self.store.as_ref(), &key).await? {
            return Ok(index);
        }
        let index = VersionIndex::empty(section);
        ops::write_json(self.store.as_ref(), &key, &index).await?;
        Ok(index)
    }

    async fn save_index(&self, index: &VersionIndex) -> Result<(), ContentError> {
        let key = version_index_key(index.section);
        ops::write_json(self.store.as_ref(), &key, index).await?;
        Ok(())
    }

    /// Snapshot the current content document for `section`, timestamped
    /// now. See [`Self::create_version_at`].
    pub async fn create_version(
        &self,
        section: Section,
        created_by: &str,
        note: Option<String>,
    ) -> Result<Option<String>, ContentError> {
        self.create_version_at(section, created_by, note, Utc::now())
            .await
    }

    /// Snapshot the current content document for `section` with an
    /// explicit creation timestamp (version ids are derived from it).
    ///
    /// Returns `Ok(None)` as a successful no-op when the section has no
    /// current document. On success the new entry is the newest in the
    /// index, the index holds at most [`MAX_VERSIONS_PER_SECTION`]
    /// entries, and evicted snapshots are deleted (best-effort; a
    /// failed eviction delete is logged and leaks the blob). If the
    /// snapshot copy fails the index is left unmodified.
    pub async fn create_version_at(
        &self,
        section: Section,
        created_by: &str,
        note: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<Option<String>, ContentError> {
        let content = content_key(section);
        let Some(meta) = self.store.head(&content).await? else {
            return Ok(None);
        };

        let version_id = generate_version_id(at);
        let snapshot_key = version_key(section, &version_id);

        match ops::copy_object(self.store.as_ref(), &content, &snapshot_key).await {
            Ok(Some(_)) => {}
            // The document vanished between head and copy.
            Ok(None) => {
                return Err(ContentError::SnapshotFailed(StoreError::NotFound {
                    key: content,
                }))
            }
            Err(err) => return Err(ContentError::SnapshotFailed(err)),
        }

        let mut index = self.load_index(section).await?;
        index.versions.insert(
            0,
            VersionEntry {
                id: version_id.clone(),
                created_at: at,
                created_by: created_by.to_string(),
                size: meta.size,
                note,
            },
        );

        if index.versions.len() > MAX_VERSIONS_PER_SECTION {
            let evicted = index.versions.split_off(MAX_VERSIONS_PER_SECTION);
            let keys: Vec<String> = evicted
                .iter()
                .map(|entry| version_key(section, &entry.id))
                .collect();
            if let Err(err) = self.store.delete(&keys).await {
                // The index contract still holds; the blobs are leaked.
                tracing::warn!(
                    %section,
                    evicted = keys.len(),
                    error = %err,
                    "Failed to delete evicted version snapshots"
                );
            }
        }

        self.save_index(&index).await?;
        Ok(Some(version_id))
    }

    /// The section's version entries, newest-first.
    pub async fn list_versions(&self, section: Section) -> Result<Vec<VersionEntry>, ContentError> {
        Ok(self.load_index(section).await?.versions)
    }

    /// Fetch one snapshot's document, or `None` if the version has no
    /// snapshot blob.
    pub async fn get_version_content(
        &self,
        section: Section,
        version_id: &str,
    ) -> Result<Option<serde_json::Value>, ContentError> {
        let key = version_key(section, version_id);
        Ok(ops::read_json(self.store.as_ref(), &key).await?)
    }

    /// Replace the live document with the snapshot at `version_id`,
    /// backing up the live document first.
    ///
    /// Fails with [`ContentError::VersionNotFound`] (no mutation) when
    /// the snapshot is absent. Fails with whatever the backup raised
    /// (no mutation) when the pre-rollback backup fails -- unlike the
    /// pre-write snapshot, the backup here is mandatory. On success the
    /// live document's bytes equal the snapshot's exactly.
    pub async fn rollback_to_version(
        &self,
        section: Section,
        version_id: &str,
        created_by: &str,
        note: Option<String>,
    ) -> Result<Rollback, ContentError> {
        let snapshot_key = version_key(section, version_id);
        if !ops::exists(self.store.as_ref(), &snapshot_key).await? {
            return Err(ContentError::VersionNotFound {
                section,
                version_id: version_id.to_string(),
            });
        }

        let backup_note = note.unwrap_or_else(|| rollback_note(version_id));
        let backup_version_id = self
            .create_version(section, created_by, Some(backup_note))
            .await?;

        let content = content_key(section);
        match ops::copy_object(self.store.as_ref(), &snapshot_key, &content).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                // Snapshot vanished after the existence check.
                return Err(ContentError::VersionNotFound {
                    section,
                    version_id: version_id.to_string(),
                });
            }
            Err(err) => return Err(ContentError::WriteFailed(err)),
        }

        Ok(Rollback {
            restored_version_id: version_id.to_string(),
            backup_version_id,
        })
    }
}
