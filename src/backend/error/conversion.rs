/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware can
 * return it directly. The body is the same envelope successful responses
 * use, with `data: null` and `success: false`:
 *
 * ```json
 * { "statusCode": 401, "data": null, "message": "Unauthorized request", "success": false }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::ApiResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            BackendError::Upstream { message, detail } => {
                tracing::error!("Upstream failure ({}): {}", message, detail);
            }
            BackendError::Internal { message, detail } => {
                tracing::error!("Internal failure ({}): {}", message, detail);
            }
            other => {
                tracing::debug!("Request rejected with {}: {}", status, other.message());
            }
        }

        let body = ApiResponse::error(status.as_u16(), self.message());
        (status, Json(body)).into_response()
    }
}
