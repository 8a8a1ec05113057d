/**
 * Login Handler
 *
 * POST /api/v1/users/login
 *
 * # Process
 *
 * 1. Look up the user by username or email
 * 2. Verify the password (bcrypt)
 * 3. Issue an access/refresh pair and store the refresh token
 * 4. Return both tokens as cookies and in the body
 *
 * Unknown users and wrong passwords get the same 401 so the response does
 * not reveal which part was wrong.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::backend::auth::cookie::session_cookies;
use crate::backend::auth::handlers::types::{LoginData, LoginRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::shared::ApiResponse;

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /api/v1/users/login HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "p1" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "statusCode": 200,
///   "data": { "user": { "id": "...", "username": "alice" }, "accessToken": "...", "refreshToken": "..." },
///   "message": "User logged in successfully",
///   "success": true
/// }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BackendError> {
    let Json(request) = body.map_err(|e| BackendError::validation(e.body_text()))?;

    let session = auth
        .login(
            request.username.as_deref(),
            request.email.as_deref(),
            request.password.as_deref(),
        )
        .await?;

    let cookies = session_cookies(&session.tokens.access_token, &session.tokens.refresh_token);
    let data = LoginData {
        user: session.user,
        access_token: session.tokens.access_token,
        refresh_token: session.tokens.refresh_token,
    };

    Ok((
        StatusCode::OK,
        cookies,
        Json(ApiResponse::new(200, data, "User logged in successfully")),
    ))
}
