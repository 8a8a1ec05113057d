//! Authentication test helpers
//!
//! Build registration forms, log in, and read token cookies off responses.

use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use axum::http::{HeaderName, HeaderValue};
use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};

pub const REGISTER: &str = "/api/v1/users/register";
pub const LOGIN: &str = "/api/v1/users/login";
pub const REFRESH: &str = "/api/v1/users/refresh-token";
pub const LOGOUT: &str = "/api/v1/users/logout";
pub const CURRENT_USER: &str = "/api/v1/users/current-user";

/// Test user credentials
#[derive(Clone, Debug)]
pub struct TestUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl TestUser {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            full_name: "Test User".to_string(),
        }
    }

    pub fn alice() -> Self {
        Self {
            full_name: "Alice".to_string(),
            ..Self::new("alice", "a@x.com", "p1")
        }
    }
}

pub fn image_part(name: &str) -> Part {
    Part::bytes(b"\x89PNG\r\n\x1a\nfake-image".to_vec())
        .file_name(name.to_string())
        .mime_type("image/png")
}

/// Text fields only
pub fn user_fields(user: &TestUser) -> MultipartForm {
    MultipartForm::new()
        .add_text("fullName", user.full_name.clone())
        .add_text("email", user.email.clone())
        .add_text("username", user.username.clone())
        .add_text("password", user.password.clone())
}

/// Text fields plus an avatar
pub fn register_form(user: &TestUser) -> MultipartForm {
    user_fields(user).add_part("avatar", image_part("avatar.png"))
}

pub async fn register(server: &TestServer, user: &TestUser) -> TestResponse {
    server.post(REGISTER).multipart(register_form(user)).await
}

pub async fn login(server: &TestServer, user: &TestUser) -> TestResponse {
    server
        .post(LOGIN)
        .json(&serde_json::json!({
            "username": user.username,
            "password": user.password,
        }))
        .await
}

/// Value of a cookie set by `response`, if any
pub fn set_cookie(response: &TestResponse, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(&prefix))
        .map(|value| value.to_string())
}

/// Token value of a cookie set by `response`
pub fn cookie_token(response: &TestResponse, name: &str) -> Option<String> {
    set_cookie(response, name).and_then(|header| {
        header
            .split(';')
            .next()
            .and_then(|pair| pair.split_once('='))
            .map(|(_, value)| value.to_string())
    })
}

pub fn cookie_header(name: &str, value: &str) -> (HeaderName, HeaderValue) {
    (COOKIE, HeaderValue::from_str(&format!("{}={}", name, value)).unwrap())
}

pub fn bearer_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    )
}
