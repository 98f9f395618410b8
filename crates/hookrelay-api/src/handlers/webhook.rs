use crate::error::HttpError;
use crate::handlers::read_upload_fields;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use hookrelay_core::WebhookResponse;
use std::sync::Arc;

/// `POST /api/claude-webhook` — compatibility endpoint for callers expecting
/// the webhook naming. Behaves exactly like `/api/upload` except for the
/// reduced acknowledgment shape (no staging-path echo).
pub async fn webhook(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<WebhookResponse>, HttpError> {
    let fields = read_upload_fields(multipart, state.config.max_file_size_bytes).await?;

    let stored = state.staging.store(&fields.file_name, &fields.bytes).await?;

    tracing::info!(
        event_type = %fields.event_type,
        original_path = %fields.file_path,
        size = stored.size,
        "Received file via webhook"
    );

    Ok(Json(WebhookResponse {
        success: true,
        message: "File processed via webhook".to_string(),
        event_type: fields.event_type,
        file_path: fields.file_path,
    }))
}
