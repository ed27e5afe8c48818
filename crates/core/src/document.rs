//! Structural validation of content documents.
//!
//! The versioning core treats documents as opaque bytes; this layer
//! checks shape and caps before a document is handed to it. Checks are
//! deliberately shallow (required top-level fields plus list caps) --
//! the admin UI owns fine-grained field validation.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::section::Section;

/// Maximum serialized document size: 1 MiB.
pub const MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

/// Maximum number of gallery projects.
pub const MAX_GALLERY_PROJECTS: usize = 50;

/// Maximum number of client logos.
pub const MAX_CLIENT_LOGOS: usize = 30;

/// Maximum number of hero background images.
pub const MAX_HERO_BACKGROUND_IMAGES: usize = 4;

/// Validate a document for a section: size bound, object shape,
/// required top-level fields, and list caps.
pub fn validate_document(section: Section, document: &Value) -> Result<(), CoreError> {
    let serialized_len = serde_json::to_vec(document)
        .map_err(|e| CoreError::Validation(format!("Document is not serializable: {e}")))?
        .len();
    if serialized_len > MAX_DOCUMENT_BYTES {
        return Err(CoreError::Validation(format!(
            "Content exceeds maximum size of {} MiB",
            MAX_DOCUMENT_BYTES / 1024 / 1024
        )));
    }

    let obj = document
        .as_object()
        .ok_or_else(|| CoreError::Validation("Content must be a JSON object".into()))?;

    match section {
        Section::Hero => validate_hero(obj),
        Section::About => validate_about(obj),
        Section::Gallery => validate_gallery(obj),
        Section::Clients => validate_clients(obj),
        Section::Footer => validate_footer(obj),
        Section::Metadata => validate_metadata(obj),
    }
}

fn validate_hero(obj: &Map<String, Value>) -> Result<(), CoreError> {
    require_object(obj, "title")?;
    require_string(obj, "subtitle")?;
    require_string(obj, "ctaButton")?;
    let images = require_array(obj, "backgroundImages")?;
    if images.len() > MAX_HERO_BACKGROUND_IMAGES {
        return Err(CoreError::Validation(format!(
            "Maximum of {MAX_HERO_BACKGROUND_IMAGES} hero background images allowed"
        )));
    }
    require_array(obj, "services")?;
    Ok(())
}

fn validate_about(obj: &Map<String, Value>) -> Result<(), CoreError> {
    require_string(obj, "title")?;
    require_string(obj, "description")?;
    require_array(obj, "stats")?;
    Ok(())
}

fn validate_gallery(obj: &Map<String, Value>) -> Result<(), CoreError> {
    require_string(obj, "title")?;
    let projects = require_array(obj, "projects")?;
    if projects.len() > MAX_GALLERY_PROJECTS {
        return Err(CoreError::Validation(format!(
            "Maximum of {MAX_GALLERY_PROJECTS} gallery projects allowed"
        )));
    }
    Ok(())
}

fn validate_clients(obj: &Map<String, Value>) -> Result<(), CoreError> {
    require_string(obj, "title")?;
    let clients = require_array(obj, "clients")?;
    if clients.len() > MAX_CLIENT_LOGOS {
        return Err(CoreError::Validation(format!(
            "Maximum of {MAX_CLIENT_LOGOS} client logos allowed"
        )));
    }
    Ok(())
}

fn validate_footer(obj: &Map<String, Value>) -> Result<(), CoreError> {
    require_string(obj, "ctaTitle")?;
    require_string(obj, "phone")?;
    require_string(obj, "email")?;
    require_object(obj, "address")?;
    Ok(())
}

fn validate_metadata(obj: &Map<String, Value>) -> Result<(), CoreError> {
    require_string(obj, "siteName")?;
    require_string(obj, "seoTitle")?;
    require_string(obj, "seoDescription")?;
    Ok(())
}

fn require_string(obj: &Map<String, Value>, field: &str) -> Result<(), CoreError> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "'{field}' is required and must be a non-empty string"
        ))),
    }
}

fn require_object(obj: &Map<String, Value>, field: &str) -> Result<(), CoreError> {
    match obj.get(field) {
        Some(Value::Object(_)) => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "'{field}' is required and must be an object"
        ))),
    }
}

fn require_array<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Vec<Value>, CoreError> {
    match obj.get(field) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(CoreError::Validation(format!(
            "'{field}' is required and must be an array"
        ))),
    }
}
