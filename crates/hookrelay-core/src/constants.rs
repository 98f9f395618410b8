//! Shared constants
//!
//! Endpoint paths and header names used by both the watcher and the server.

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "hookrelay-server";

/// Primary upload endpoint path.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Alternate upload endpoint kept for caller compatibility.
pub const WEBHOOK_PATH: &str = "/api/claude-webhook";

/// Unauthenticated liveness probe path.
pub const HEALTH_PATH: &str = "/health";

/// Marker header identifying automated hook uploads.
pub const HOOK_HEADER: &str = "x-claude-hook";

/// Multipart field names shared across client and server.
pub const FIELD_FILE: &str = "file";
pub const FIELD_EVENT_TYPE: &str = "eventType";
pub const FIELD_FILE_PATH: &str = "filePath";
