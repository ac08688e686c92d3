use utoipa::{Modify, OpenApi};

use crate::features::custom_orders::{dtos as orders_dtos, handlers as orders_handlers};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // System
        system_handlers::root,
        system_handlers::hello,
        system_handlers::test_database,
        // Custom orders
        orders_handlers::create_custom_order,
    ),
    components(
        schemas(
            // System
            system_dtos::MessageResponseDto,
            system_dtos::DiagnosticsResponseDto,
            // Custom orders
            orders_dtos::CreateCustomOrderForm,
            orders_dtos::CustomOrderResponseDto,
        )
    ),
    tags(
        (name = "system", description = "Health check and diagnostics"),
        (name = "custom-orders", description = "Custom order submissions with optional file upload"),
    ),
    info(
        title = "Order Intake API",
        version = "0.1.0",
        description = "Custom order submissions with optional file upload",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
