//! Envelope assertions
//!
//! Every response body is `{statusCode, data, message, success}`.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert the HTTP status and the envelope agree, and return the body
pub fn assert_envelope(response: &TestResponse, expected: StatusCode) -> Value {
    assert_eq!(
        response.status_code(),
        expected,
        "unexpected status, body: {}",
        response.text()
    );

    let body: Value = response.json();
    assert_eq!(body["statusCode"], expected.as_u16());
    assert_eq!(body["success"], expected.as_u16() < 400);
    assert!(body["message"].is_string(), "message missing: {}", body);
    if expected.as_u16() >= 400 {
        assert_eq!(body["data"], Value::Null);
    }
    body
}

/// Assert a user payload never carries secrets
pub fn assert_no_secrets(user: &Value) {
    for key in ["password", "passwordHash", "password_hash", "refreshToken", "refresh_token"] {
        assert!(user.get(key).is_none(), "user payload leaked {}: {}", key, user);
    }
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected {:?} to contain {:?}",
            $haystack,
            $needle
        );
    };
}
