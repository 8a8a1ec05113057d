//! Uniform response envelope
//!
//! Every endpoint, success or failure, answers with the same JSON shape:
//!
//! ```json
//! { "statusCode": 200, "data": { ... }, "message": "Success", "success": true }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Build a response; `success` is derived from the status code
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data: Some(data),
            message: message.into(),
            success: status_code < 400,
        }
    }
}

impl ApiResponse<()> {
    /// Error envelope with `data: null`
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data: None,
            message: message.into(),
            success: false,
        }
    }
}
