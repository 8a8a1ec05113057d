/**
 * Cloudinary Upload Client
 *
 * Signed uploads against `POST /v1_1/{cloud_name}/auto/upload`. The file is
 * sent inline as a base64 data URI so the request is a plain form post.
 *
 * # Signing
 *
 * `signature = hex(sha256("timestamp={ts}{api_secret}"))`. The account must
 * be configured for SHA-256 request signatures.
 */

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::backend::media::{MediaError, MediaStore, UploadedMedia};
use crate::shared::config::CloudinaryConfig;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

pub struct CloudinaryStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryStore {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/auto/upload",
            self.config.base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    fn sign(&self, timestamp: u64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("timestamp={}{}", timestamp, self.config.api_secret).as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Best guess at a MIME type from the file extension
fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(&self, path: &Path) -> Result<UploadedMedia, MediaError> {
        let bytes = tokio::fs::read(path).await?;
        let data_uri = format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes));

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        let timestamp_field = timestamp.to_string();
        let signature = self.sign(timestamp);

        let form = [
            ("file", data_uri.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("timestamp", timestamp_field.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", "sha256"),
        ];

        let response = self.client.post(self.upload_url()).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let uploaded: UploadResponse = response.json().await?;
        let url = uploaded
            .secure_url
            .or(uploaded.url)
            .ok_or(MediaError::MissingUrl)?;

        Ok(UploadedMedia { url })
    }
}
