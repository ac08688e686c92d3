use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::custom_orders::handlers::create_custom_order;
use crate::features::custom_orders::services::CustomOrderService;

/// Create routes for the custom orders feature
///
/// Public, used directly by the order form.
pub fn routes(service: Arc<CustomOrderService>, max_body_size: usize) -> Router {
    Router::new()
        .route(
            "/api/custom-orders",
            post(create_custom_order).layer(DefaultBodyLimit::max(max_body_size)),
        )
        .with_state(service)
}
