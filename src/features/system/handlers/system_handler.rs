use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::system::dtos::{DiagnosticsResponseDto, MessageResponseDto};
use crate::features::system::services::{DiagnosticsService, EnvPresence};

/// Health check
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = MessageResponseDto)
    )
)]
pub async fn root() -> Json<MessageResponseDto> {
    Json(MessageResponseDto::new("Hello from FastAPI Backend!"))
}

/// Hello message for frontend connectivity checks
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "system",
    responses(
        (status = 200, description = "Hello message", body = MessageResponseDto)
    )
)]
pub async fn hello() -> Json<MessageResponseDto> {
    Json(MessageResponseDto::new("Hello from the backend API!"))
}

/// Database diagnostics
///
/// Reports whether the document store is initialized and reachable, whether
/// the database settings are present, and up to ten collection names.
/// Always answers 200; failures are described in the `database` field.
#[utoipa::path(
    get,
    path = "/test",
    tag = "system",
    responses(
        (status = 200, description = "Diagnostics report", body = DiagnosticsResponseDto)
    )
)]
pub async fn test_database(
    State(service): State<Arc<DiagnosticsService>>,
) -> Json<DiagnosticsResponseDto> {
    Json(service.report(EnvPresence::from_process_env()).await)
}
