//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{export_metrics, health, index, predict, redirect_to_slash, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // SMS endpoints
        .route("/sms", get(redirect_to_slash).post(predict))
        .route("/sms/", get(index).post(predict))
        // Health endpoint
        .route("/health", get(health))
        // Metrics endpoint
        .route("/metrics", get(export_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
