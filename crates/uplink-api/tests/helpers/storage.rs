//! Recording stub for the ObjectStorage trait.
//!
//! Counts every backend call so tests can assert that client-input errors are
//! rejected before any storage interaction, and records the completion
//! manifest so tests can assert its ordering.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use uplink_core::models::UploadPart;
use uplink_storage::{ObjectStorage, StorageError, StorageResult};

/// Arguments of the most recent complete_session call.
#[derive(Debug, Clone)]
pub struct CompleteCall {
    pub key: String,
    pub upload_id: String,
    pub parts: Vec<UploadPart>,
}

#[derive(Default)]
pub struct StubStorage {
    create_calls: AtomicUsize,
    presign_calls: AtomicUsize,
    complete_calls: AtomicUsize,
    last_complete: Mutex<Option<CompleteCall>>,
    fail_create: Option<String>,
    fail_complete: Option<String>,
}

impl StubStorage {
    pub fn new() -> Self {
        StubStorage::default()
    }

    /// Stub whose create_session fails with the given message.
    pub fn failing_create(message: &str) -> Self {
        StubStorage {
            fail_create: Some(message.to_string()),
            ..StubStorage::default()
        }
    }

    /// Stub whose complete_session fails with the given message.
    pub fn failing_complete(message: &str) -> Self {
        StubStorage {
            fail_complete: Some(message.to_string()),
            ..StubStorage::default()
        }
    }

    pub fn create_call_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn presign_call_count(&self) -> usize {
        self.presign_calls.load(Ordering::SeqCst)
    }

    pub fn complete_call_count(&self) -> usize {
        self.complete_calls.load(Ordering::SeqCst)
    }

    pub fn backend_call_count(&self) -> usize {
        self.create_call_count() + self.presign_call_count() + self.complete_call_count()
    }

    pub fn last_complete(&self) -> Option<CompleteCall> {
        self.last_complete.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl ObjectStorage for StubStorage {
    async fn create_session(&self, _key: &str) -> StorageResult<String> {
        let call = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(message) = &self.fail_create {
            return Err(StorageError::SessionCreateFailed(message.clone()));
        }
        Ok(format!("test-upload-{}", call))
    }

    async fn presign_part(
        &self,
        key: &str,
        upload_id: &str,
        part_number: i32,
        _expires_in: Duration,
    ) -> StorageResult<String> {
        let call = self.presign_calls.fetch_add(1, Ordering::SeqCst) + 1;
        // Distinct URL per call: a re-issued capability need not match the
        // previous one.
        Ok(format!(
            "https://test-bucket.s3.example.test/{}?uploadId={}&partNumber={}&signature=sig-{}",
            key, upload_id, part_number, call
        ))
    }

    async fn complete_session(
        &self,
        key: &str,
        upload_id: &str,
        parts: &[UploadPart],
    ) -> StorageResult<String> {
        self.complete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_complete {
            return Err(StorageError::CompleteFailed(message.clone()));
        }
        *self.last_complete.lock().expect("lock poisoned") = Some(CompleteCall {
            key: key.to_string(),
            upload_id: upload_id.to_string(),
            parts: parts.to_vec(),
        });
        Ok(format!("https://test-bucket.s3.example.test/{}", key))
    }
}
