//! Version metadata types and the version id format.
//!
//! A version id is the snapshot's UTC creation time at second precision
//! with colons replaced by hyphens (`2024-03-01T14-05-09`), so ids sort
//! lexically in chronological order and are safe as storage key
//! segments. The JSON field names of the persisted index are part of
//! the bucket layout contract and must not change.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::section::Section;

/// Maximum number of versions retained per section before
/// oldest-eviction.
pub const MAX_VERSIONS_PER_SECTION: usize = 10;

/// Timestamp layout shared by [`generate_version_id`] and
/// [`parse_version_id`].
const VERSION_ID_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Metadata for one historical snapshot of a section's content.
///
/// Immutable once created. Field names match the persisted index JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    /// Version id, derived from the creation timestamp.
    pub id: String,
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
    /// Email of the admin whose edit triggered the snapshot.
    pub created_by: String,
    /// Byte size of the snapshotted document.
    pub size: u64,
    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The ordered collection of version entries for one section,
/// newest-first (index 0 is the most recent).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionIndex {
    pub section: Section,
    pub versions: Vec<VersionEntry>,
}

impl VersionIndex {
    /// A fresh, empty index for `section`.
    pub fn empty(section: Section) -> Self {
        Self {
            section,
            versions: Vec::new(),
        }
    }
}

/// Generate a version id from a creation timestamp.
pub fn generate_version_id(at: DateTime<Utc>) -> String {
    at.format(VERSION_ID_FORMAT).to_string()
}

/// Parse a version id back to its creation timestamp.
///
/// Also serves as the validity check for ids arriving over HTTP: an id
/// that does not parse is rejected before it is ever interpolated into
/// a storage key.
pub fn parse_version_id(id: &str) -> Result<DateTime<Utc>, CoreError> {
    NaiveDateTime::parse_from_str(id, VERSION_ID_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| CoreError::Validation(format!("Invalid version id '{id}'")))
}
