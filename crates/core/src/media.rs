//! Image upload constraints and filename handling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::keys::IMAGES_PREFIX;

/// Maximum image file size: 10 MiB.
pub const MAX_IMAGE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for upload.
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/webp", "image/svg+xml"];

/// File extensions accepted for upload (lowercase, with dot).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".svg"];

/// The closed set of image folders admins may upload into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFolder {
    Hero,
    Gallery,
    Clients,
    General,
}

pub const ALL_IMAGE_FOLDERS: &[ImageFolder] = &[
    ImageFolder::Hero,
    ImageFolder::Gallery,
    ImageFolder::Clients,
    ImageFolder::General,
];

impl ImageFolder {
    /// Full key prefix, e.g. `images/gallery`.
    pub fn as_prefix(self) -> &'static str {
        match self {
            Self::Hero => "images/hero",
            Self::Gallery => "images/gallery",
            Self::Clients => "images/clients",
            Self::General => "images/general",
        }
    }
}

impl fmt::Display for ImageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_prefix())
    }
}

impl FromStr for ImageFolder {
    type Err = CoreError;

    /// Parses the full prefix form (`images/hero`), matching what the
    /// admin UI sends in the upload form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "images/hero" => Ok(Self::Hero),
            "images/gallery" => Ok(Self::Gallery),
            "images/clients" => Ok(Self::Clients),
            "images/general" => Ok(Self::General),
            other => Err(CoreError::Validation(format!(
                "Invalid image folder '{other}'"
            ))),
        }
    }
}

/// Lowercase a filename and replace anything outside `[a-z0-9.-]` with
/// hyphens, collapsing runs of hyphens. Keeps extensions intact.
pub fn sanitize_filename(filename: &str) -> String {
    let lowered: String = filename
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let mut result = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for c in lowered.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }
    result
}

/// True when `filename` ends in an allowed image extension.
pub fn has_allowed_extension(filename: &str) -> bool {
    let lowered = filename.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
}

/// Validate an upload: size bound, MIME type, and file extension.
pub fn validate_image(
    size_bytes: u64,
    content_type: &str,
    filename: &str,
) -> Result<(), CoreError> {
    if size_bytes > MAX_IMAGE_SIZE_BYTES {
        return Err(CoreError::Validation(format!(
            "Image exceeds maximum size of {} MiB",
            MAX_IMAGE_SIZE_BYTES / 1024 / 1024
        )));
    }
    if !ALLOWED_IMAGE_MIME_TYPES.contains(&content_type) {
        return Err(CoreError::Validation(format!(
            "Invalid image type '{content_type}'. Allowed: {}",
            ALLOWED_IMAGE_MIME_TYPES.join(", ")
        )));
    }
    if !has_allowed_extension(filename) {
        return Err(CoreError::Validation(format!(
            "Invalid image extension. Allowed: {}",
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        )));
    }
    Ok(())
}

/// True when `key` lives under the images prefix. Deletion is only
/// permitted for image keys; content and version blobs are off limits.
pub fn is_image_key(key: &str) -> bool {
    key.starts_with(&format!("{IMAGES_PREFIX}/"))
}
