//! Object-store adapter for the Brickside CMS backend.
//!
//! Exposes the [`ObjectStore`] trait over keyed binary/JSON blobs plus
//! two implementations: [`S3Store`] for production (S3-compatible
//! buckets, e.g. Cloudflare R2) and [`MemoryStore`] for tests. The
//! [`ops`] module layers the common operations (JSON read/write, copy,
//! soft-delete-to-trash, image listing) on top of the trait.

pub mod error;
pub mod memory;
pub mod object;
pub mod ops;
pub mod s3;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use object::{ListPage, ListRequest, ObjectMeta, ObjectStore, PutOptions, StoredObject};
pub use s3::S3Store;
