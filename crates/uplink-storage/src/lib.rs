//! Uplink Storage Library
//!
//! The object-storage capability behind the upload coordinator. The
//! [`ObjectStorage`] trait models exactly the three backend operations the
//! coordinator depends on (open a multipart session, sign a part-upload URL,
//! complete a session); [`S3Storage`] implements them against AWS S3 and
//! S3-compatible providers. Object-key generation is centralized in the
//! `keys` module so every session gets the same `{prefix}/{uuid}.{ext}`
//! layout.

pub mod keys;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use keys::ObjectKeyFormat;
pub use s3::S3Storage;
pub use traits::{ObjectStorage, StorageError, StorageResult};
