use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed message payload of the health and hello endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponseDto {
    pub message: String,
}

impl MessageResponseDto {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Best-effort database diagnostics report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponseDto {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    /// Whether `DATABASE_URL` is set in the process environment
    #[schema(example = "✅ Set")]
    pub database_url: String,
    /// Whether `DATABASE_NAME` is set in the process environment
    #[schema(example = "❌ Not Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// At most ten collection names
    pub collections: Vec<String>,
}
