//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use uplink_core::Config;

/// Maximum presigned URL validity (7 days, the S3 SigV4 limit).
const MAX_PART_URL_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Validate critical configuration values
///
/// Fails fast on settings that would otherwise only surface as confusing
/// backend errors at request time.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.s3_bucket.trim().is_empty() {
        return Err(anyhow::anyhow!("S3_BUCKET must not be empty"));
    }

    if config.key_prefix.trim_matches('/').is_empty() {
        return Err(anyhow::anyhow!("UPLOAD_KEY_PREFIX must not be empty"));
    }

    if config.key_extension.trim_start_matches('.').is_empty() {
        return Err(anyhow::anyhow!("UPLOAD_KEY_EXTENSION must not be empty"));
    }

    if config.part_url_ttl_secs == 0 {
        return Err(anyhow::anyhow!("PART_URL_TTL_SECS must be positive"));
    }

    if config.part_url_ttl_secs > MAX_PART_URL_TTL_SECS {
        return Err(anyhow::anyhow!(
            "PART_URL_TTL_SECS exceeds the 7-day presigned URL limit ({} seconds)",
            MAX_PART_URL_TTL_SECS
        ));
    }

    if let Some(endpoint) = &config.s3_endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "S3_ENDPOINT must be an http(s) URL, got: {}",
                endpoint
            ));
        }
    }

    // Wildcard CORS is the expected configuration for this surface; note it
    // in production logs anyway.
    if config.is_production() && config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS allows all origins in production");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server_port: 3000,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            s3_bucket: "media-bucket".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_endpoint: None,
            key_prefix: "uploads".to_string(),
            key_extension: "mp4".to_string(),
            part_url_ttl_secs: 3600,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let mut config = valid_config();
        config.s3_bucket = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = valid_config();
        config.part_url_ttl_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_ttl_over_presign_limit_rejected() {
        let mut config = valid_config();
        config.part_url_ttl_secs = MAX_PART_URL_TTL_SECS + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_malformed_endpoint_rejected() {
        let mut config = valid_config();
        config.s3_endpoint = Some("localhost:9000".to_string());
        assert!(validate_config(&config).is_err());

        config.s3_endpoint = Some("http://localhost:9000".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
