//! Route configuration and setup
//!
//! The routing surface is an explicit table: three protocol operations, a
//! liveness probe, the OpenAPI document, and a catch-all 404. Preflight
//! OPTIONS requests are answered by the CORS layer before any handler (and
//! therefore before any storage interaction).

use crate::handlers;
use crate::state::AppState;
use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use uplink_core::Config;

/// Generous bound for the completion manifest; a full 10,000-part manifest is
/// still well under this.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route(
            "/initiate",
            get(handlers::initiate::initiate_upload).post(handlers::initiate::initiate_upload),
        )
        .route("/sign-part", get(handlers::sign_part::sign_part))
        .route("/complete", post(handlers::complete::complete_upload))
        .route("/health", get(health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
///
/// The upload surface is called straight from browsers, so the default policy
/// is permissive: any origin, the three methods the protocol uses, and the
/// `Content-Type` request header. Specific origins can be pinned via config.
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<_, _>>()
            .context("Invalid CORS origin")?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };
    Ok(cors)
}

/// Liveness probe. The coordinator owns no durable state, so there is nothing
/// deeper to check without touching the storage backend.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Catch-all for unknown paths.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
