//! Axum router configuration.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::SharedCookbook;

/// Create the application router
pub fn create_router(cookbook: SharedCookbook) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/parse", post(handlers::parse))
        .route("/entry", post(handlers::create_entry))
        .route("/summary", get(handlers::summary))
        .with_state(cookbook)
}
