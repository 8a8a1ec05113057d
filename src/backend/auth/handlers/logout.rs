//! POST /api/v1/users/logout
//!
//! Requires a valid access token. Clears the stored refresh token and both
//! cookies.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::backend::auth::cookie::cleared_cookies;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::ApiResponse;

pub async fn logout(
    State(auth): State<Arc<AuthService>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, BackendError> {
    auth.logout(user.id).await?;

    Ok((
        StatusCode::OK,
        cleared_cookies(),
        Json(ApiResponse::new(200, serde_json::json!({}), "User logged out")),
    ))
}
