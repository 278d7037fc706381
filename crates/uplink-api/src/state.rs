//! Application state.
//!
//! Immutable after startup: configuration, the storage capability, and the
//! object-key format. Handlers never write to it, so requests need no locking.

use std::sync::Arc;
use uplink_core::Config;
use uplink_storage::{ObjectKeyFormat, ObjectStorage};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn ObjectStorage>,
    pub key_format: ObjectKeyFormat,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn ObjectStorage>) -> Self {
        let key_format = ObjectKeyFormat::new(&config.key_prefix, &config.key_extension);
        AppState {
            config,
            storage,
            key_format,
        }
    }
}
