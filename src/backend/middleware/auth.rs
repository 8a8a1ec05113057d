/**
 * Authentication Middleware
 *
 * Gates routes that need a logged-in user. The access token is taken from
 * the `accessToken` cookie or, failing that, the `Authorization: Bearer`
 * header, verified, and resolved to a live identity. The identity (public
 * view, no secrets) is attached to the request extensions for handlers.
 *
 * The refresh token is never read or written here.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::cookie;
use crate::backend::auth::users::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Identity resolved from a verified access token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub UserResponse);

/// Authentication middleware
///
/// Returns 401 with a generic message if the token is missing, malformed,
/// expired, signed with the wrong key, or names a user that no longer
/// exists.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = cookie::access_token(request.headers()).ok_or_else(|| {
        tracing::warn!("No access token on request to {}", request.uri().path());
        BackendError::unauthenticated("Unauthorized request")
    })?;

    let user = state.auth.verify_access(token).await?;

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only meaningful behind `auth_middleware`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserResponse);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|AuthenticatedUser(user)| AuthUser(user.clone()))
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthenticated("Unauthorized request")
            })
    }
}
