//! Wire and internal models
//!
//! Wire structs serialize with camelCase names to match the upload protocol.
//! [`WatchEvent`] is internal to the watcher pipeline and never serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of filesystem change a watch event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEventKind {
    /// File appeared after watching started.
    Add,
    /// Existing file was written to.
    Change,
}

impl WatchEventKind {
    /// Wire value sent as the `eventType` multipart field.
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchEventKind::Add => "add",
            WatchEventKind::Change => "change",
        }
    }
}

impl std::fmt::Display for WatchEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stabilized filesystem change, produced by the stabilizer and consumed
/// once by the forwarder.
#[derive(Debug, Clone)]
pub struct WatchEvent {
    pub kind: WatchEventKind,
    pub path: PathBuf,
    pub detected_at: DateTime<Utc>,
}

/// Payload details echoed back by the primary upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    pub event_type: String,
    pub original_path: String,
    pub saved_path: String,
    pub size: u64,
    pub timestamp: DateTime<Utc>,
}

/// Acknowledgment returned by `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub data: UploadData,
}

/// Reduced acknowledgment returned by the compatibility webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub success: bool,
    pub message: String,
    pub event_type: String,
    pub file_path: String,
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
}
