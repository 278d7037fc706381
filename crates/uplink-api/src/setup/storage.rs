//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use uplink_core::Config;
use uplink_storage::{ObjectStorage, S3Storage};

/// Build the S3-backed storage capability from configuration.
///
/// Constructed once at startup and shared behind an `Arc`; the client holds
/// no mutable session state, so one handle serves all concurrent requests.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn ObjectStorage>> {
    tracing::info!(
        bucket = %config.s3_bucket,
        region = %config.s3_region,
        endpoint = ?config.s3_endpoint,
        "Initializing object storage"
    );

    let storage = S3Storage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
    )
    .await?;

    Ok(Arc::new(storage))
}
