//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpError>`. Domain errors from
//! `hookrelay-core` convert into `HttpError` and render consistently
//! (status, JSON body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hookrelay_core::{AppError, ErrorMetadata, LogLevel};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from hookrelay-core)
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        HttpError(err)
    }
}

fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, "Request failed");
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // 5xx bodies carry a stable error string plus the detail; client
        // errors echo the detail directly, matching the wire contract.
        let body = if status.is_server_error() {
            Json(ErrorResponse {
                error: "Failed to process file".to_string(),
                message: Some(app_error.client_message()),
            })
        } else {
            Json(ErrorResponse {
                error: app_error.client_message(),
                message: None,
            })
        };

        (status, body).into_response()
    }
}
