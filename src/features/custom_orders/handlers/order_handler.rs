use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppMultipart;
use crate::features::custom_orders::dtos::{
    CreateCustomOrderForm, CustomOrderResponseDto, NewCustomOrder, UploadedFile,
};
use crate::features::custom_orders::services::CustomOrderService;
use crate::shared::constants::DEFAULT_UPLOAD_CONTENT_TYPE;

/// Submit a custom order
///
/// Accepts multipart/form-data with:
/// - `name`: Submitter name (required)
/// - `email`: Submitter email (required)
/// - `description`: Free-text description (optional)
/// - `file`: Attachment stored under its original filename (optional)
#[utoipa::path(
    post,
    path = "/api/custom-orders",
    tag = "custom-orders",
    request_body(
        content = CreateCustomOrderForm,
        content_type = "multipart/form-data",
        description = "Order form with optional file attachment",
    ),
    responses(
        (status = 200, description = "Order recorded", body = CustomOrderResponseDto),
        (status = 400, description = "Missing required field or unusable filename"),
        (status = 413, description = "Request body too large"),
        (status = 503, description = "Database not initialized")
    )
)]
pub async fn create_custom_order(
    State(service): State<Arc<CustomOrderService>>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<Json<CustomOrderResponseDto>> {
    let mut name: Option<String> = None;
    let mut email: Option<String> = None;
    let mut description: Option<String> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "name" => name = Some(field.text().await?),
            "email" => email = Some(field.text().await?),
            "description" => description = Some(field.text().await?),
            "file" => {
                let file_name = field.file_name().map(|s| s.to_string());
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| DEFAULT_UPLOAD_CONTENT_TYPE.to_string());
                let data = field.bytes().await?;

                file = file_from_part(file_name, content_type, data.to_vec())?;
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let name = name.ok_or_else(|| AppError::Validation("name is required".to_string()))?;
    let email = email.ok_or_else(|| AppError::Validation("email is required".to_string()))?;

    let response = service
        .submit(NewCustomOrder {
            name,
            email,
            description,
            file,
        })
        .await?;

    Ok(Json(response))
}

/// Turn a `file` part into an upload.
///
/// A part without filename and without content is what browsers send for an
/// untouched file input, and counts as no file.
fn file_from_part(
    file_name: Option<String>,
    content_type: String,
    data: Vec<u8>,
) -> Result<Option<UploadedFile>> {
    match file_name.filter(|n| !n.is_empty()) {
        Some(file_name) => Ok(Some(UploadedFile {
            file_name,
            content_type,
            data,
        })),
        None if data.is_empty() => Ok(None),
        None => Err(AppError::Validation(
            "file part must include a filename".to_string(),
        )),
    }
}
