//! The content service: reads and writes the live per-section
//! documents, snapshotting before every overwrite.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use brickside_core::keys::content_key;
use brickside_core::section::{Section, ALL_SECTIONS};
use brickside_store::{ops, ObjectStore};

use crate::error::ContentError;
use crate::versioning::VersionManager;

/// Outcome of a successful content update.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUpdate {
    pub section: Section,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
    /// Version id of the pre-update snapshot; `None` on first write or
    /// when the snapshot attempt failed (logged, not fatal).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_created: Option<String>,
}

pub struct ContentService {
    store: Arc<dyn ObjectStore>,
    versions: VersionManager,
}

impl ContentService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        let versions = VersionManager::new(Arc::clone(&store));
        Self { store, versions }
    }

    /// The version manager sharing this service's store.
    pub fn versions(&self) -> &VersionManager {
        &self.versions
    }

    /// The current document for a section, or `None` before the first
    /// write.
    pub async fn get_content(&self, section: Section) -> Result<Option<Value>, ContentError> {
        Ok(ops::read_json(self.store.as_ref(), &content_key(section)).await?)
    }

    /// All sections' current documents, keyed by section name. Sections
    /// without a document yet are omitted.
    pub async fn get_all_content(&self) -> Result<serde_json::Map<String, Value>, ContentError> {
        let mut all = serde_json::Map::new();
        for section in ALL_SECTIONS {
            if let Some(document) = self.get_content(*section).await? {
                all.insert(section.as_str().to_string(), document);
            }
        }
        Ok(all)
    }

    /// Replace a section's document.
    ///
    /// First attempts a safety snapshot of the current document. A
    /// failed snapshot is logged and tolerated -- edit availability is
    /// favoured over strict version completeness -- but a failed
    /// overwrite is fatal and leaves the previous document intact.
    pub async fn update_content(
        &self,
        section: Section,
        document: &Value,
        updated_by: &str,
    ) -> Result<ContentUpdate, ContentError> {
        let version_created = match self
            .versions
            .create_version(section, updated_by, Some("Content update".to_string()))
            .await
        {
            Ok(version_id) => version_id,
            Err(err) => {
                tracing::warn!(
                    %section,
                    error = %err,
                    "Failed to create version backup; proceeding with update"
                );
                None
            }
        };

        ops::write_json(self.store.as_ref(), &content_key(section), document)
            .await
            .map_err(ContentError::WriteFailed)?;

        Ok(ContentUpdate {
            section,
            updated_at: Utc::now(),
            updated_by: updated_by.to_string(),
            version_created,
        })
    }
}
