//! Route configuration and setup

use crate::auth::{auth_middleware, AuthState};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use hookrelay_core::constants::{HEALTH_PATH, UPLOAD_PATH, WEBHOOK_PATH};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Headroom on top of the file-size limit for multipart framing and the
/// metadata fields.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(state: AppState) -> Router {
    let state = Arc::new(state);
    let auth_state = Arc::new(AuthState {
        api_key: state.config.api_key.clone(),
    });
    let body_limit = state.config.max_file_size_bytes + MULTIPART_OVERHEAD_BYTES;

    // Public routes (no authentication required)
    let public_routes = Router::new().route(HEALTH_PATH, get(handlers::health::health));

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .route(UPLOAD_PATH, post(handlers::upload::upload))
        .route(WEBHOOK_PATH, post(handlers::webhook::webhook))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    public_routes
        .merge(protected_routes)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
