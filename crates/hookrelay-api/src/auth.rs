//! Bearer-token authentication middleware
//!
//! Both upload endpoints require `Authorization: Bearer <shared secret>`.
//! The health probe is registered outside this middleware.

use crate::error::HttpError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use hookrelay_core::AppError;
use std::sync::Arc;
use subtle::ConstantTimeEq;

#[derive(Clone)]
pub struct AuthState {
    pub api_key: String,
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpError(AppError::Unauthorized(
                "No authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let token = auth_header.strip_prefix("Bearer ").unwrap_or_default();

    if secure_compare(token, &auth_state.api_key) {
        return next.run(request).await;
    }

    HttpError(AppError::Unauthorized(
        "Unauthorized - Invalid API key".to_string(),
    ))
    .into_response()
}
