use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use uplink_core::models::{CompleteUploadRequest, CompleteUploadResponse};
use uplink_core::AppError;
use validator::Validate;

/// Finalize a multipart upload session from the client's manifest.
///
/// The manifest is forwarded ordered by part number; the backend validates it
/// against what was actually stored and rejects the completion on any missing
/// part, ETag mismatch, or already-closed session. That rejection is surfaced
/// as-is, with no partial recovery and no compensating abort; the caller
/// restarts the affected parts and resubmits.
#[utoipa::path(
    post,
    path = "/complete",
    tag = "uploads",
    request_body = CompleteUploadRequest,
    responses(
        (status = 200, description = "Upload completed", body = CompleteUploadResponse),
        (status = 400, description = "Invalid or empty body", body = ErrorResponse),
        (status = 500, description = "Storage backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "complete_upload"))]
pub async fn complete_upload(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CompleteUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    // Rejects empty key/uploadId/parts before any backend call. Nothing more:
    // completeness and ETag correctness are the backend's to judge.
    request
        .validate()
        .map_err(AppError::from)
        .map_err(HttpAppError::from)?;

    let mut parts = request.parts;
    parts.sort_by_key(|part| part.part_number);

    let location = state
        .storage
        .complete_session(&request.key, &request.upload_id, &parts)
        .await
        .map_err(HttpAppError::from)?;

    tracing::info!(
        key = %request.key,
        upload_id = %request.upload_id,
        part_count = parts.len(),
        location = %location,
        "Multipart upload completed"
    );

    Ok(Json(CompleteUploadResponse { location }))
}
