use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Custom order form for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads the multipart body field by field.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateCustomOrderForm {
    /// Submitter name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Submitter email (not format-checked)
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Free-text description of the order
    pub description: Option<String>,
    /// Optional attachment, stored under its original filename
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: Option<String>,
}

/// File part received with an order submission
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Parsed order submission, after required-field checks
#[derive(Debug, Clone)]
pub struct NewCustomOrder {
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub file: Option<UploadedFile>,
}

/// Response returned after an order has been recorded
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomOrderResponseDto {
    /// Always "success"
    #[schema(example = "success")]
    pub status: String,
    /// Identifier generated by the document store
    pub id: String,
    /// Path the attachment was written to, null without attachment
    #[schema(example = "uploads/sketch.png")]
    pub saved_file_path: Option<String>,
}

impl CustomOrderResponseDto {
    pub fn success(id: String, saved_file_path: Option<String>) -> Self {
        Self {
            status: "success".to_string(),
            id,
            saved_file_path,
        }
    }
}
