use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::system::handlers;
use crate::features::system::services::DiagnosticsService;

/// Create routes for health, hello and diagnostics
pub fn routes(service: Arc<DiagnosticsService>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/test", get(handlers::test_database))
        .with_state(service)
}
