//! Test helpers: build the router against a recording stub backend.
//!
//! Run with: `cargo test -p uplink-api`. No external services are required;
//! the storage capability is replaced by [`storage::StubStorage`].

pub mod storage;

use axum_test::TestServer;
use std::sync::Arc;
use storage::StubStorage;
use uplink_api::setup::routes::setup_routes;
use uplink_api::state::AppState;
use uplink_core::Config;

/// Test application: server plus the stub it talks to.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<StubStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        s3_bucket: "test-bucket".to_string(),
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        key_prefix: "uploads".to_string(),
        key_extension: "mp4".to_string(),
        part_url_ttl_secs: 3600,
    }
}

/// Setup test app with a fresh stub backend.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(Arc::new(StubStorage::new()))
}

/// Setup test app around a specific stub (e.g. one rigged to fail).
pub fn setup_test_app_with(stub: Arc<StubStorage>) -> TestApp {
    let config = test_config();
    let state = Arc::new(AppState::new(config.clone(), stub.clone()));
    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        storage: stub,
    }
}
