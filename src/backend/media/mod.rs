//! Media Store Module
//!
//! Avatars and cover images are hosted by a third-party store. The core only
//! ever hands over a local file path and gets a URL back; the local file is a
//! temporary spool written by the transport layer and is removed here once
//! the upload attempt is over, whatever its outcome.
//!
//! # Module Structure
//!
//! ```text
//! media/
//! ├── mod.rs          - MediaStore trait, errors, cleanup helpers
//! └── cloudinary.rs   - Cloudinary upload client
//! ```

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Cloudinary upload client
pub mod cloudinary;

pub use cloudinary::CloudinaryStore;

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub url: String,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("media store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("media store rejected upload with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("media store response did not contain a URL")]
    MissingUrl,
}

/// External media hosting
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload the file at `path` and return where it is now hosted
    ///
    /// Implementations do not delete `path`; see `upload_and_cleanup`.
    async fn upload(&self, path: &Path) -> Result<UploadedMedia, MediaError>;
}

/// Upload `path` and remove the local file afterwards, on success or failure
pub async fn upload_and_cleanup(
    store: &dyn MediaStore,
    path: &Path,
) -> Result<UploadedMedia, MediaError> {
    let result = store.upload(path).await;
    match &result {
        Ok(media) => tracing::info!("Uploaded {} to {}", path.display(), media.url),
        Err(e) => tracing::error!("Upload of {} failed: {}", path.display(), e),
    }
    discard(path).await;
    result
}

/// Best-effort removal of a temporary upload
///
/// Failure is logged and swallowed; a leftover temp file is not worth
/// failing the request over.
pub async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove temporary upload {}: {}", path.display(), e);
        }
    }
}
