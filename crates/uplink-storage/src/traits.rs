//! Storage abstraction trait
//!
//! This module defines the ObjectStorage trait the upload coordinator calls
//! into. All durable state (session existence, uploaded parts, part ETags)
//! lives behind this trait; the coordinator holds only the identifiers a
//! request carries.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use uplink_core::models::UploadPart;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open upload session: {0}")]
    SessionCreateFailed(String),

    #[error("Failed to sign part upload URL: {0}")]
    SignFailed(String),

    #[error("Failed to complete upload session: {0}")]
    CompleteFailed(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object-storage capability used by the upload coordinator.
///
/// Every method is a single-shot call with no internal retry; a caller that
/// hits a transient failure re-issues the whole operation. Implementations
/// must be safe to share across unboundedly many concurrent requests.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Open a multipart upload session for `key` and return the session's
    /// upload id.
    async fn create_session(&self, key: &str) -> StorageResult<String>;

    /// Produce a time-bounded URL authorizing a single PUT of one part's
    /// bytes under `(key, upload_id, part_number)`.
    ///
    /// Repeated calls with identical inputs are safe: each returns a fresh
    /// capability for the same part slot. No check is made that `key` and
    /// `upload_id` reference a live session; the backend reports that when
    /// the URL is exercised or the session is completed.
    async fn presign_part(
        &self,
        key: &str,
        upload_id: &str,
        part_number: i32,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Complete the session from a manifest ordered by part number and
    /// return the final object location.
    ///
    /// The backend validates the manifest against what was actually stored
    /// and fails the completion if any part is missing, any ETag mismatches,
    /// or the session is already closed.
    async fn complete_session(
        &self,
        key: &str,
        upload_id: &str,
        parts: &[UploadPart],
    ) -> StorageResult<String>;
}
