use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::custom_orders::{routes as orders_routes, CustomOrderService};
use crate::features::system::{routes as system_routes, DiagnosticsService};
use crate::modules::document_store::DocumentStore;
use crate::modules::uploads::LocalUploadStorage;

/// Assemble the application router with its middleware stack
pub fn build_router(
    store: Option<Arc<dyn DocumentStore>>,
    uploads: Arc<LocalUploadStorage>,
    app_config: &AppConfig,
    swagger_config: &SwaggerConfig,
) -> Router {
    let order_service = Arc::new(CustomOrderService::new(store.clone(), uploads));
    let diagnostics_service = Arc::new(DiagnosticsService::new(store));

    Router::new()
        .merge(swagger_routes(swagger_config))
        .merge(system_routes(diagnostics_service))
        .merge(orders_routes(order_service, app_config.max_request_body_size))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(
                    app_config.cors_allowed_origins.clone(),
                )),
        )
}

fn swagger_routes(config: &SwaggerConfig) -> Router {
    let modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::basic_auth_middleware,
            ))
        }
        None => swagger,
    }
}
