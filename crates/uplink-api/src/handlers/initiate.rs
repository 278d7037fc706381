use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use uplink_core::models::InitiateUploadResponse;

/// Open a multipart upload session.
///
/// The object key is server-generated; the caller supplies nothing. The
/// returned pair stays valid until the session is completed or expires per
/// backend policy.
#[utoipa::path(
    post,
    path = "/initiate",
    tag = "uploads",
    responses(
        (status = 200, description = "Multipart session opened", body = InitiateUploadResponse),
        (status = 500, description = "Storage backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "initiate_upload"))]
pub async fn initiate_upload(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    // A fresh key per call; never reused for a different session.
    let key = state.key_format.generate();

    let upload_id = state
        .storage
        .create_session(&key)
        .await
        .map_err(HttpAppError::from)?;

    tracing::info!(
        key = %key,
        upload_id = %upload_id,
        "Opened multipart upload session"
    );

    Ok(Json(InitiateUploadResponse { upload_id, key }))
}
