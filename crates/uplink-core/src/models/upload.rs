use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Response returned when a multipart upload session is opened.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitiateUploadResponse {
    /// Session identifier issued by the storage backend
    pub upload_id: String,
    /// Server-generated object key the session writes to
    pub key: String,
}

/// Response containing a signed URL authorizing one part upload
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignPartResponse {
    /// Time-bounded URL for a direct PUT of the part's bytes
    pub signed_url: String,
}

/// One entry of a completion manifest: a part number paired with the ETag
/// storage returned when the part was uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadPart {
    pub etag: String,
    pub part_number: i32,
}

/// Request to finalize a multipart upload session.
///
/// The manifest asserts "these are all the parts"; the storage backend is the
/// authority that checks it against what was actually stored.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadRequest {
    #[validate(length(min = 1, message = "key must not be empty"))]
    pub key: String,
    #[validate(length(min = 1, message = "uploadId must not be empty"))]
    pub upload_id: String,
    #[validate(length(min = 1, message = "parts must not be empty"))]
    pub parts: Vec<UploadPart>,
}

/// Response after a completed upload
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadResponse {
    /// Final location of the assembled object
    pub location: String,
}
