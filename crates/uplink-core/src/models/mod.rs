//! Wire models shared between the API surface and the storage capability.

pub mod upload;

pub use upload::{
    CompleteUploadRequest, CompleteUploadResponse, InitiateUploadResponse, SignPartResponse,
    UploadPart,
};
