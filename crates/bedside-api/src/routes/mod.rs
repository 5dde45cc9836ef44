//! Route definitions
//!
//! Presence routes live under the metrics prefix `/api/metrics`.

use axum::{http::Method, http::Uri, routing::get, Router};

use crate::handlers::{health, presence};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/metrics", metrics_routes())
        .fallback(not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route(
        "/health",
        get(health::health_check).fallback(method_not_allowed),
    )
}

/// Metrics routes
fn metrics_routes() -> Router<AppState> {
    Router::new().route(
        "/presence",
        get(presence::get_presence)
            .post(presence::update_presence)
            .fallback(method_not_allowed),
    )
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}
