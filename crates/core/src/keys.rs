//! The object-store key scheme.
//!
//! Compatibility with this layout is part of the deployment contract
//! (the public site reads `content/{section}.json` directly from the
//! bucket), so every key is derived here and nowhere else.
//!
//! ```text
//! content/{section}.json                    current content document
//! _versions/{section}/_index.json           version index
//! _versions/{section}/{versionId}.json      one snapshot
//! images/{folder}/{timestamp}-{filename}    uploaded image
//! _trash/{timestamp}-{flattened-key}        soft-deleted image
//! ```

use chrono::{DateTime, Utc};

use crate::media::sanitize_filename;
use crate::section::Section;

pub const CONTENT_PREFIX: &str = "content";
pub const VERSIONS_PREFIX: &str = "_versions";
pub const IMAGES_PREFIX: &str = "images";
pub const TRASH_PREFIX: &str = "_trash";

/// Key of the current content document for a section.
pub fn content_key(section: Section) -> String {
    format!("{CONTENT_PREFIX}/{section}.json")
}

/// Key of a section's version index.
pub fn version_index_key(section: Section) -> String {
    format!("{VERSIONS_PREFIX}/{section}/_index.json")
}

/// Key of one version snapshot.
pub fn version_key(section: Section, version_id: &str) -> String {
    format!("{VERSIONS_PREFIX}/{section}/{version_id}.json")
}

/// Key for a newly uploaded image: millisecond timestamp plus the
/// sanitized original filename, under the given folder prefix.
pub fn image_key(folder_prefix: &str, filename: &str, at: DateTime<Utc>) -> String {
    format!(
        "{folder_prefix}/{}-{}",
        at.timestamp_millis(),
        sanitize_filename(filename)
    )
}

/// Trash key for a soft-deleted object. The original key is flattened
/// (slashes become hyphens) so the trash prefix stays a single level.
pub fn trash_key(original_key: &str, at: DateTime<Utc>) -> String {
    format!(
        "{TRASH_PREFIX}/{}-{}",
        at.timestamp_millis(),
        original_key.replace('/', "-")
    )
}
