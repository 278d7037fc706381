//! Uplink Core Library
//!
//! Shared configuration, error types, and wire models for the upload
//! coordinator. Everything here is transport-agnostic; HTTP conversion lives
//! in the api crate and storage access in the storage crate.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
