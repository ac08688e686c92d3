use serde::{Deserialize, Serialize};

/// Envelope used for error responses across all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

/// Listing metadata; no endpoint returns lists yet, so errors always carry `null`
#[derive(Debug, Serialize, Deserialize)]
#[allow(dead_code)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}
