//! Test application
//!
//! Builds the full router with `build_app`, so requests go through the real
//! routes, middleware, and layers. Only the collaborators are swapped:
//! `MemoryUserStore` for PostgreSQL and `RecordingMedia` for Cloudinary.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;

use videohub::backend::auth::MemoryUserStore;
use videohub::backend::media::{MediaError, MediaStore, UploadedMedia};
use videohub::backend::server::build_app;
use videohub::shared::{AppConfig, CloudinaryConfig};

/// Media store that records what it was asked to upload
#[derive(Default)]
pub struct RecordingMedia {
    pub fail: AtomicBool,
    pub uploads: Mutex<Vec<PathBuf>>,
}

impl RecordingMedia {
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn uploaded(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for RecordingMedia {
    async fn upload(&self, path: &Path) -> Result<UploadedMedia, MediaError> {
        // The file must still exist when the store is called
        assert!(path.exists(), "upload handed a missing file: {}", path.display());
        self.uploads.lock().unwrap().push(path.to_path_buf());

        if self.fail.load(Ordering::SeqCst) {
            return Err(MediaError::Rejected {
                status: 502,
                body: "upstream unavailable".to_string(),
            });
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("file");
        Ok(UploadedMedia {
            url: format!("https://res.cloudinary.test/{}", name),
        })
    }
}

/// Configuration with fixed secrets and the given upload directory
pub fn test_config(upload_dir: PathBuf, cloudinary_url: &str) -> AppConfig {
    AppConfig::builder()
        .upload_dir(upload_dir)
        .access_secret("integration-access-secret".to_string())
        .access_expiry(Duration::from_secs(15 * 60))
        .refresh_secret("integration-refresh-secret".to_string())
        .refresh_expiry(Duration::from_secs(10 * 24 * 60 * 60))
        .max_upload_bytes(64 * 1024)
        .cloudinary(CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
            base_url: cloudinary_url.to_string(),
        })
        .build()
        .unwrap()
}

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryUserStore>,
    pub media: Arc<RecordingMedia>,
    pub upload_dir: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("temp");
        let config = test_config(upload_dir.clone(), "http://127.0.0.1:9");

        let store = Arc::new(MemoryUserStore::new());
        let media = Arc::new(RecordingMedia::default());
        let app = build_app(&config, store.clone(), media.clone());

        Self {
            server: TestServer::new(app).unwrap(),
            store,
            media,
            upload_dir,
            _dir: dir,
        }
    }

    /// Files left in the upload spool directory
    pub fn spooled_files(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(&self.upload_dir) {
            Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}
