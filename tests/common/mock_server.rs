//! Mock Cloudinary server
//!
//! Wiremock stand-ins for the upload endpoint, used when a test needs the
//! real `CloudinaryStore` in the loop.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const UPLOAD_PATH: &str = "/v1_1/demo/auto/upload";

/// Upload endpoint that accepts everything
pub async fn mock_cloudinary_ok() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "public_id": "sample",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/sample.png",
            "url": "http://res.cloudinary.com/demo/image/upload/sample.png"
        })))
        .mount(&server)
        .await;
    server
}

/// Upload endpoint that rejects everything
pub async fn mock_cloudinary_rejecting() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPLOAD_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": { "message": "Invalid Signature" } })),
        )
        .mount(&server)
        .await;
    server
}
