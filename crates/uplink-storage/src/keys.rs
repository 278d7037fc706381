//! Shared object-key generation for upload sessions.
//!
//! Key format: `{prefix}/{uuid-v4}.{extension}`. A key is generated once per
//! initiate call; uuid-v4 randomness keeps keys unique across sessions and
//! across coordinator instances without any shared state.

use uuid::Uuid;

/// Fixed namespace prefix and extension applied to every generated key.
#[derive(Debug, Clone)]
pub struct ObjectKeyFormat {
    prefix: String,
    extension: String,
}

impl ObjectKeyFormat {
    /// Create a key format. Surrounding separators are normalized so
    /// `uploads/` and `.mp4` produce the same keys as `uploads` and `mp4`.
    pub fn new(prefix: &str, extension: &str) -> Self {
        ObjectKeyFormat {
            prefix: prefix.trim_matches('/').to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Generate a globally-unique object key.
    pub fn generate(&self) -> String {
        format!("{}/{}.{}", self.prefix, Uuid::new_v4(), self.extension)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}
