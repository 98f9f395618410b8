//! Request handlers

pub mod health;
pub mod upload;
pub mod webhook;

use axum::extract::multipart::Multipart;
use axum::http::StatusCode;
use hookrelay_core::constants::{FIELD_EVENT_TYPE, FIELD_FILE, FIELD_FILE_PATH};
use hookrelay_core::AppError;

/// Parsed multipart upload: the file part plus its event metadata.
pub(crate) struct UploadFields {
    pub file_name: String,
    pub bytes: axum::body::Bytes,
    pub event_type: String,
    pub file_path: String,
}

/// Walk the multipart body and collect the known fields. Exactly one file
/// part is required; metadata fields default to empty strings when absent,
/// matching the upload protocol.
pub(crate) async fn read_upload_fields(
    mut multipart: Multipart,
    max_file_size_bytes: usize,
) -> Result<UploadFields, AppError> {
    let mut file: Option<(String, axum::body::Bytes)> = None;
    let mut event_type = String::new();
    let mut file_path = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FIELD_FILE) => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .unwrap_or("upload.bin")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                        AppError::PayloadTooLarge(format!(
                            "File exceeds the {} byte limit",
                            max_file_size_bytes
                        ))
                    } else {
                        AppError::InvalidInput(format!("Failed to read file part: {}", e))
                    }
                })?;
                file = Some((file_name, bytes));
            }
            Some(FIELD_EVENT_TYPE) => {
                event_type = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Malformed field: {}", e)))?;
            }
            Some(FIELD_FILE_PATH) => {
                file_path = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Malformed field: {}", e)))?;
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| AppError::InvalidInput("No file uploaded".to_string()))?;

    if bytes.len() > max_file_size_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{} bytes exceeds max {} bytes",
            bytes.len(),
            max_file_size_bytes
        )));
    }

    Ok(UploadFields {
        file_name,
        bytes,
        event_type,
        file_path,
    })
}
