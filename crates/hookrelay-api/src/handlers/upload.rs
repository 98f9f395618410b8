use crate::error::HttpError;
use crate::handlers::read_upload_fields;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use hookrelay_core::{UploadData, UploadResponse};
use std::sync::Arc;

/// `POST /api/upload` — persist one uploaded file to staging and acknowledge
/// with the computed staging path and byte size.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpError> {
    let fields = read_upload_fields(multipart, state.config.max_file_size_bytes).await?;

    let stored = state.staging.store(&fields.file_name, &fields.bytes).await?;

    tracing::info!(
        event_type = %fields.event_type,
        original_path = %fields.file_path,
        size = stored.size,
        saved_path = %stored.path.display(),
        "Received file from watcher"
    );

    Ok(Json(UploadResponse {
        success: true,
        message: "File received and processed".to_string(),
        data: UploadData {
            event_type: fields.event_type,
            original_path: fields.file_path,
            saved_path: stored.path.display().to_string(),
            size: stored.size,
            timestamp: Utc::now(),
        },
    }))
}
