//! Domain types and validation for the Brickside CMS backend.
//!
//! This crate is pure logic with no I/O: the section enum, version id
//! format, object-store key scheme, media constraints, and per-section
//! document validation. Both the store/content crates and the API layer
//! depend on it.

pub mod auth;
pub mod document;
pub mod error;
pub mod keys;
pub mod media;
pub mod section;
pub mod version;
