//! Uplink API Library
//!
//! HTTP surface of the upload coordinator: handlers for the three-phase
//! multipart upload protocol (initiate / sign-part / complete), the explicit
//! route table, CORS policy, and application setup.
//!
//! Handlers are stateless request/response functions. No phase depends on
//! in-process memory from a previous phase, so the three phases of one upload
//! may land on different coordinator instances.

mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
