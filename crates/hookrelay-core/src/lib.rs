//! Hookrelay Core Library
//!
//! This crate provides the configuration, error types, and wire models that
//! are shared by the watcher and the ingest server.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    HealthResponse, UploadData, UploadResponse, WatchEvent, WatchEventKind, WebhookResponse,
};
