/**
 * Refresh Handler
 *
 * POST /api/v1/users/refresh-token
 *
 * Takes the refresh token from the `refreshToken` cookie, or failing that
 * from a JSON body `{ "refreshToken": "..." }`. On success both tokens are
 * replaced and the presented one stops working.
 */

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};

use crate::backend::auth::cookie::{get_cookie, session_cookies, REFRESH_COOKIE_NAME};
use crate::backend::auth::handlers::types::RefreshRequest;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::shared::{ApiResponse, SharedError};

pub async fn refresh_access_token(
    State(auth): State<Arc<AuthService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice::<RefreshRequest>(&body)
            .map_err(SharedError::from)?
            .refresh_token
    };

    let incoming = get_cookie(&headers, REFRESH_COOKIE_NAME)
        .map(str::to_string)
        .or(from_body);

    let session = auth.refresh(incoming.as_deref()).await?;

    let cookies = session_cookies(&session.tokens.access_token, &session.tokens.refresh_token);
    Ok((
        StatusCode::OK,
        cookies,
        Json(ApiResponse::new(200, session.tokens, "Access token refreshed")),
    ))
}
