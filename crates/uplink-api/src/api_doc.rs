//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use uplink_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Uplink API",
        version = "0.1.0",
        description = "Direct-to-storage multipart upload coordinator. Clients open a session, fetch a short-lived signed URL per part, PUT part bytes straight to object storage, and finalize with the collected ETags."
    ),
    paths(
        handlers::initiate::initiate_upload,
        handlers::sign_part::sign_part,
        handlers::complete::complete_upload,
    ),
    components(schemas(
        models::upload::InitiateUploadResponse,
        models::upload::SignPartResponse,
        models::upload::UploadPart,
        models::upload::CompleteUploadRequest,
        models::upload::CompleteUploadResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "uploads", description = "Multipart upload session operations")
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
