//! Token cookies
//!
//! Both tokens travel as `HttpOnly; Secure` cookies in addition to the JSON
//! body, so browser clients never have to touch them from script.

use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};

pub const ACCESS_COOKIE_NAME: &str = "accessToken";
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Read a cookie value from every `Cookie` header on the request
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Access token from the cookie, falling back to the bearer header
pub fn access_token(headers: &HeaderMap) -> Option<&str> {
    get_cookie(headers, ACCESS_COOKIE_NAME).or_else(|| bearer_token(headers))
}

fn token_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; HttpOnly; Secure; Path=/; SameSite=Lax")
}

fn expired_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Secure; Path=/; SameSite=Lax; Max-Age=0")
}

fn append(headers: &mut HeaderMap, cookie: String) {
    // Tokens are base64url and names are constants, so this is always valid
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        headers.append(SET_COOKIE, value);
    }
}

/// `Set-Cookie` headers carrying both tokens
pub fn session_cookies(access: &str, refresh: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    append(&mut headers, token_cookie(ACCESS_COOKIE_NAME, access));
    append(&mut headers, token_cookie(REFRESH_COOKIE_NAME, refresh));
    headers
}

/// `Set-Cookie` headers that remove both tokens
pub fn cleared_cookies() -> HeaderMap {
    let mut headers = HeaderMap::new();
    append(&mut headers, expired_cookie(ACCESS_COOKIE_NAME));
    append(&mut headers, expired_cookie(REFRESH_COOKIE_NAME));
    headers
}
