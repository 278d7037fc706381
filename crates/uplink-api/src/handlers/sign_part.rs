use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uplink_core::models::SignPartResponse;
use uplink_core::AppError;
use utoipa::IntoParams;

/// Query parameters for part authorization.
///
/// All three are mandatory; they are modeled as optional strings so that a
/// missing or malformed value is rejected here with the API's own error shape
/// instead of an extractor rejection.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SignPartParams {
    /// Object key returned by initiate
    pub key: Option<String>,
    /// Session identifier returned by initiate
    pub upload_id: Option<String>,
    /// 1-based part number
    pub part_number: Option<String>,
}

/// Issue a time-bounded signed URL authorizing one part upload.
///
/// No check is made that `key`/`uploadId` reference a live session; the
/// backend reports that when the URL is exercised or completion is attempted.
/// Safe to call repeatedly with identical inputs to re-acquire a fresh URL
/// after expiry: it never creates a new part slot, only a new capability to
/// write to the same slot.
#[utoipa::path(
    get,
    path = "/sign-part",
    tag = "uploads",
    params(SignPartParams),
    responses(
        (status = 200, description = "Signed part upload URL issued", body = SignPartResponse),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 500, description = "Storage backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, params), fields(operation = "sign_part"))]
pub async fn sign_part(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SignPartParams>,
) -> Result<impl IntoResponse, HttpAppError> {
    // Client-input validation happens before any backend call.
    let key = params.key.as_deref().unwrap_or("");
    let upload_id = params.upload_id.as_deref().unwrap_or("");
    if key.is_empty() || upload_id.is_empty() {
        return Err(HttpAppError::from(AppError::InvalidInput(
            "key and uploadId are required".to_string(),
        )));
    }

    // Non-numeric input parses to the invalid sentinel 0.
    let part_number = params
        .part_number
        .as_deref()
        .and_then(|s| s.trim().parse::<i32>().ok())
        .unwrap_or(0);
    if part_number <= 0 {
        return Err(HttpAppError::from(AppError::InvalidInput(
            "partNumber must be a positive integer".to_string(),
        )));
    }

    let signed_url = state
        .storage
        .presign_part(key, upload_id, part_number, state.config.part_url_ttl())
        .await
        .map_err(HttpAppError::from)?;

    tracing::info!(
        key = %key,
        upload_id = %upload_id,
        part_number = part_number,
        "Issued signed part upload URL"
    );

    Ok(Json(SignPartResponse { signed_url }))
}
