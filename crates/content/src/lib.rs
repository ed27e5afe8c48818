//! Content, versioning, and media services for the Brickside CMS.
//!
//! This is the system's core: [`versioning::VersionManager`] maintains
//! the per-section version index and snapshots, [`service::ContentService`]
//! reads and writes the live content documents (snapshotting before
//! every overwrite), and [`media::MediaService`] handles image uploads
//! with soft deletion to trash.

pub mod error;
pub mod media;
pub mod service;
pub mod versioning;

pub use error::{ContentError, MediaError};
pub use media::MediaService;
pub use service::ContentService;
pub use versioning::VersionManager;
