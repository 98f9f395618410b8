use axum::Json;
use chrono::Utc;
use hookrelay_core::constants::SERVICE_NAME;
use hookrelay_core::HealthResponse;

/// `GET /health` — unauthenticated liveness probe. No side effects.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
    })
}
