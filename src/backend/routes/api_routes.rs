/**
 * API Route Handlers
 *
 * User account endpoints, all under `/api/v1/users`.
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - Multipart registration with avatar upload
 * - `POST /login` - Credential login, sets token cookies
 * - `POST /refresh-token` - Rotate the token pair
 *
 * ## Authenticated (access token required)
 * - `POST /logout` - Clear the stored refresh token and cookies
 * - `GET /current-user` - The logged-in user
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{
    get_current_user, login, logout, refresh_access_token, register,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `max_upload_bytes` bounds the multipart registration body; every other
/// route keeps the router-wide JSON limit.
pub fn configure_api_routes(
    router: Router<AppState>,
    app_state: &AppState,
    max_upload_bytes: usize,
) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(logout))
        .route("/current-user", get(get_current_user))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    let users = Router::new()
        .route(
            "/register",
            post(register).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/login", post(login))
        .route("/refresh-token", post(refresh_access_token))
        .merge(protected);

    router.nest("/api/v1/users", users)
}
