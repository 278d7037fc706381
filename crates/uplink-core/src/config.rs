//! Configuration module
//!
//! Env-based configuration for the upload coordinator. Storage credentials
//! themselves are read by the AWS SDK from its usual environment chain; this
//! config only carries the knobs the coordinator owns (bucket, key naming,
//! URL validity window, server settings).

use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_PART_URL_TTL_SECS: u64 = 3600;
const DEFAULT_KEY_PREFIX: &str = "uploads";
const DEFAULT_KEY_EXTENSION: &str = "mp4";

/// Application configuration.
///
/// The bucket is held exactly once; every storage operation flows through the
/// single client built from it, so the three upload phases cannot reference
/// different buckets.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Target bucket for all three upload phases.
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    /// Namespace prefix applied to every generated object key.
    pub key_prefix: String,
    /// Extension applied to every generated object key.
    pub key_extension: String,
    /// Validity window for signed part-upload URLs, in seconds.
    pub part_url_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let s3_bucket = env::var("S3_BUCKET")
            .map_err(|_| anyhow::anyhow!("S3_BUCKET environment variable not set"))?;

        Ok(Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            s3_bucket,
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            key_prefix: env::var("UPLOAD_KEY_PREFIX")
                .unwrap_or_else(|_| DEFAULT_KEY_PREFIX.to_string()),
            key_extension: env::var("UPLOAD_KEY_EXTENSION")
                .unwrap_or_else(|_| DEFAULT_KEY_EXTENSION.to_string()),
            part_url_ttl_secs: env_parse("PART_URL_TTL_SECS", DEFAULT_PART_URL_TTL_SECS),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Validity window for signed part-upload URLs.
    pub fn part_url_ttl(&self) -> Duration {
        Duration::from_secs(self.part_url_ttl_secs)
    }
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}
