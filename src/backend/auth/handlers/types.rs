/**
 * Authentication Handler Types
 *
 * Request bodies and `data` payloads shared by the login and refresh
 * handlers. Registration is multipart and has no JSON type. Every request
 * field is optional so a missing field reaches the service as `None`
 * and gets the documented error instead of a deserializer rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserResponse;

/// Login request
///
/// Either `username` or `email` identifies the user.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Refresh request, used when the token is not sent as a cookie
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// `data` of a successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}
