//! Registration through the real Cloudinary client
//!
//! The upload endpoint is a wiremock server; everything else is the full
//! router over an in-memory store.

#[path = "../../common/mod.rs"]
mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use wiremock::MockServer;

use common::*;
use videohub::backend::auth::MemoryUserStore;
use videohub::backend::media::CloudinaryStore;
use videohub::backend::server::build_app;

struct CloudinaryApp {
    server: TestServer,
    store: Arc<MemoryUserStore>,
    upload_dir: std::path::PathBuf,
    _dir: tempfile::TempDir,
}

fn app_against(mock: &MockServer) -> CloudinaryApp {
    let dir = tempfile::tempdir().unwrap();
    let upload_dir = dir.path().join("temp");
    let config = test_config(upload_dir.clone(), &mock.uri());

    let store = Arc::new(MemoryUserStore::new());
    let media = Arc::new(CloudinaryStore::new(config.cloudinary.clone()));
    let app = build_app(&config, store.clone(), media);

    CloudinaryApp {
        server: TestServer::new(app).unwrap(),
        store,
        upload_dir,
        _dir: dir,
    }
}

fn spool_is_empty(dir: &std::path::Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(true)
}

#[tokio::test]
async fn test_register_uploads_to_cloudinary() {
    let mock = mock_cloudinary_ok().await;
    let app = app_against(&mock);

    let response = register(&app.server, &TestUser::alice()).await;
    let body = assert_envelope(&response, StatusCode::CREATED);

    assert_eq!(
        body["data"]["avatar"],
        "https://res.cloudinary.com/demo/image/upload/sample.png"
    );
    assert!(spool_is_empty(&app.upload_dir));

    let requests = mock.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let form = String::from_utf8_lossy(&requests[0].body);
    assert_contains!(form, "api_key=test-key");
    assert_contains!(form, "signature=");
    assert!(!form.contains("test-secret"));
}

#[tokio::test]
async fn test_register_cloudinary_rejection() {
    let mock = mock_cloudinary_rejecting().await;
    let app = app_against(&mock);

    let response = register(&app.server, &TestUser::alice()).await;
    let body = assert_envelope(&response, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(body["message"], "Error uploading avatar, please try again");
    assert!(!body.to_string().contains("Invalid Signature"));
    assert!(app.store.is_empty().await);
    assert!(spool_is_empty(&app.upload_dir));
}
