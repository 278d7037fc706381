use crate::traits::{ObjectStorage, StorageError, StorageResult};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};
use aws_sdk_s3::Client;
use std::time::Duration;
use uplink_core::models::UploadPart;

/// S3-backed implementation of the upload-session capability.
///
/// One value of this type serves all three upload phases, so the bucket every
/// phase talks to is the bucket it was constructed with.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let region_provider =
            RegionProviderChain::first_try(aws_config::Region::new(region.clone()));

        // Single-shot calls only: the HTTP caller re-issues the whole
        // operation on failure, so the SDK must not retry underneath it.
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        let client = if let Some(ref endpoint) = endpoint_url {
            // Path-style addressing is required by MinIO and most other
            // S3-compatible providers.
            let s3_config = aws_sdk_s3::config::Builder::from(&config)
                .endpoint_url(endpoint)
                .force_path_style(true)
                .build();
            Client::from_conf(s3_config)
        } else {
            Client::new(&config)
        };

        Ok(S3Storage {
            client,
            bucket,
            region,
            endpoint_url,
        })
    }

    /// Public URL of an assembled object, used when the backend's completion
    /// response carries no location.
    fn object_url(&self, key: &str) -> String {
        object_url_for(self.endpoint_url.as_deref(), &self.bucket, &self.region, key)
    }
}

/// Generate the public URL for an object.
///
/// For AWS S3, uses the virtual-hosted format
/// `https://{bucket}.s3.{region}.amazonaws.com/{key}`; for S3-compatible
/// providers, path-style `{endpoint}/{bucket}/{key}`.
fn object_url_for(endpoint_url: Option<&str>, bucket: &str, region: &str, key: &str) -> String {
    if let Some(endpoint) = endpoint_url {
        let base_url = endpoint.trim_end_matches('/');
        format!("{}/{}/{}", base_url, bucket, key)
    } else {
        format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    #[tracing::instrument(skip(self), fields(
        s3.bucket = %self.bucket,
        s3.key = %key,
        s3.operation = "CreateMultipartUpload"
    ))]
    async fn create_session(&self, key: &str) -> StorageResult<String> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .create_multipart_upload()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let detail = format!("{}", DisplayErrorContext(&e));
                tracing::error!(
                    error = %detail,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Failed to open multipart session"
                );
                StorageError::SessionCreateFailed(detail)
            })?;

        let upload_id = output
            .upload_id()
            .ok_or_else(|| {
                StorageError::BackendError(
                    "CreateMultipartUpload response carried no upload id".to_string(),
                )
            })?
            .to_string();

        tracing::info!(
            upload_id = %upload_id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Multipart session opened"
        );

        Ok(upload_id)
    }

    #[tracing::instrument(skip(self), fields(
        s3.bucket = %self.bucket,
        s3.key = %key,
        s3.operation = "UploadPart",
        s3.part_number = part_number
    ))]
    async fn presign_part(
        &self,
        key: &str,
        upload_id: &str,
        part_number: i32,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let presigning_config = PresigningConfig::builder()
            .expires_in(expires_in)
            .build()
            .map_err(|e| StorageError::SignFailed(e.to_string()))?;

        let presigned = self
            .client
            .upload_part()
            .bucket(&self.bucket)
            .key(key)
            .upload_id(upload_id)
            .part_number(part_number)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                let detail = format!("{}", DisplayErrorContext(&e));
                tracing::error!(error = %detail, "Failed to sign part upload URL");
                StorageError::SignFailed(detail)
            })?;

        tracing::info!(
            expires_in_seconds = expires_in.as_secs(),
            "Signed part upload URL"
        );

        Ok(presigned.uri().to_string())
    }

    #[tracing::instrument(skip(self, parts), fields(
        s3.bucket = %self.bucket,
        s3.key = %key,
        s3.operation = "CompleteMultipartUpload",
        part_count = parts.len()
    ))]
    async fn complete_session(
        &self,
        key: &str,
        upload_id: &str,
        parts: &[UploadPart],
    ) -> StorageResult<String> {
        let start = std::time::Instant::now();

        let completed_parts: Vec<CompletedPart> = parts
            .iter()
            .map(|part| {
                CompletedPart::builder()
                    .e_tag(part.etag.clone())
                    .part_number(part.part_number)
                    .build()
            })
            .collect();

        let manifest = CompletedMultipartUpload::builder()
            .set_parts(Some(completed_parts))
            .build();

        let output = self
            .client
            .complete_multipart_upload()
            .bucket(&self.bucket)
            .key(key)
            .upload_id(upload_id)
            .multipart_upload(manifest)
            .send()
            .await
            .map_err(|e| {
                let detail = format!("{}", DisplayErrorContext(&e));
                tracing::error!(
                    error = %detail,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Failed to complete multipart session"
                );
                StorageError::CompleteFailed(detail)
            })?;

        let location = output
            .location()
            .map(str::to_string)
            .unwrap_or_else(|| self.object_url(key));

        tracing::info!(
            location = %location,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Multipart session completed"
        );

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_aws_format() {
        let url = object_url_for(None, "media-bucket", "us-east-1", "uploads/abc.mp4");
        assert_eq!(
            url,
            "https://media-bucket.s3.us-east-1.amazonaws.com/uploads/abc.mp4"
        );
    }

    #[test]
    fn test_object_url_custom_endpoint_is_path_style() {
        let url = object_url_for(
            Some("http://localhost:9000/"),
            "media-bucket",
            "us-east-1",
            "uploads/abc.mp4",
        );
        assert_eq!(url, "http://localhost:9000/media-bucket/uploads/abc.mp4");
    }
}
