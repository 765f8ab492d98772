//! Axum router configuration

use crate::server::handlers;
use crate::server::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/api/analyze", post(handlers::analyze))
        .with_state(state)
}
