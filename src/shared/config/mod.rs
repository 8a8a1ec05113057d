//! Application configuration module
//!
//! Provides configuration types for the server, the token issuer and the
//! media store. Everything is sourced from the process environment once at
//! startup and then passed down explicitly; nothing reads the environment
//! after `AppConfig::from_env` returns.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ACCESS_EXPIRY: &str = "1d";
const DEFAULT_REFRESH_EXPIRY: &str = "10d";
const DEFAULT_UPLOAD_DIR: &str = "./public/temp";
const DEFAULT_CLOUDINARY_URL: &str = "https://api.cloudinary.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Longest accepted token lifetime (ten years)
const MAX_TOKEN_EXPIRY: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Signing keys and lifetimes for the two token kinds
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub access_secret: String,
    pub access_expiry: Duration,
    pub refresh_secret: String,
    pub refresh_expiry: Duration,
}

/// Credentials for the Cloudinary upload API
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Overridable so tests can point the client at a mock server
    pub base_url: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Single origin allowed to make credentialed cross-origin requests
    pub cors_origin: Option<String>,
    /// Directory multipart uploads are spooled to before hand-off
    pub upload_dir: PathBuf,
    /// Upper bound on a multipart registration body
    pub max_upload_bytes: usize,
    pub auth: AuthConfig,
    pub cloudinary: CloudinaryConfig,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder()
            .access_secret(required("ACCESS_TOKEN_SECRET")?)
            .refresh_secret(required("REFRESH_TOKEN_SECRET")?)
            .access_expiry(parse_expiry(
                "ACCESS_TOKEN_EXPIRY",
                &optional("ACCESS_TOKEN_EXPIRY").unwrap_or_else(|| DEFAULT_ACCESS_EXPIRY.to_string()),
            )?)
            .refresh_expiry(parse_expiry(
                "REFRESH_TOKEN_EXPIRY",
                &optional("REFRESH_TOKEN_EXPIRY").unwrap_or_else(|| DEFAULT_REFRESH_EXPIRY.to_string()),
            )?)
            .cloudinary(CloudinaryConfig {
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
                base_url: optional("CLOUDINARY_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_URL.to_string()),
            });

        if let Some(port) = optional("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("SERVER_PORT", port.clone()))?;
            builder = builder.port(port);
        }
        if let Some(url) = optional("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(origin) = optional("CORS_ORIGIN") {
            builder = builder.cors_origin(origin);
        }
        if let Some(dir) = optional("UPLOAD_TEMP_DIR") {
            builder = builder.upload_dir(PathBuf::from(dir));
        }
        if let Some(limit) = optional("MAX_UPLOAD_BYTES") {
            let limit = limit
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("MAX_UPLOAD_BYTES", limit.clone()))?;
            builder = builder.max_upload_bytes(limit);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.access_secret.is_empty() {
            return Err(ConfigError::MissingValue("ACCESS_TOKEN_SECRET"));
        }
        if self.auth.refresh_secret.is_empty() {
            return Err(ConfigError::MissingValue("REFRESH_TOKEN_SECRET"));
        }
        if self.auth.access_secret == self.auth.refresh_secret {
            return Err(ConfigError::SharedSecret);
        }
        check_expiry("ACCESS_TOKEN_EXPIRY", self.auth.access_expiry)?;
        check_expiry("REFRESH_TOKEN_EXPIRY", self.auth.refresh_expiry)?;
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("MAX_UPLOAD_BYTES", "0".to_string()));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    port: u16,
    database_url: Option<String>,
    cors_origin: Option<String>,
    upload_dir: PathBuf,
    max_upload_bytes: usize,
    access_secret: Option<String>,
    access_expiry: Duration,
    refresh_secret: Option<String>,
    refresh_expiry: Duration,
    cloudinary: Option<CloudinaryConfig>,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            cors_origin: None,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            access_secret: None,
            access_expiry: Duration::from_secs(24 * 60 * 60),
            refresh_secret: None,
            refresh_expiry: Duration::from_secs(10 * 24 * 60 * 60),
            cloudinary: None,
        }
    }
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn database_url(mut self, url: String) -> Self {
        self.database_url = Some(url);
        self
    }

    pub fn cors_origin(mut self, origin: String) -> Self {
        self.cors_origin = Some(origin);
        self
    }

    pub fn upload_dir(mut self, dir: PathBuf) -> Self {
        self.upload_dir = dir;
        self
    }

    pub fn max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }

    pub fn access_secret(mut self, secret: String) -> Self {
        self.access_secret = Some(secret);
        self
    }

    pub fn access_expiry(mut self, expiry: Duration) -> Self {
        self.access_expiry = expiry;
        self
    }

    pub fn refresh_secret(mut self, secret: String) -> Self {
        self.refresh_secret = Some(secret);
        self
    }

    pub fn refresh_expiry(mut self, expiry: Duration) -> Self {
        self.refresh_expiry = expiry;
        self
    }

    pub fn cloudinary(mut self, cloudinary: CloudinaryConfig) -> Self {
        self.cloudinary = Some(cloudinary);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            port: self.port,
            database_url: self.database_url,
            cors_origin: self.cors_origin,
            upload_dir: self.upload_dir,
            max_upload_bytes: self.max_upload_bytes,
            auth: AuthConfig {
                access_secret: self
                    .access_secret
                    .ok_or(ConfigError::MissingValue("ACCESS_TOKEN_SECRET"))?,
                access_expiry: self.access_expiry,
                refresh_secret: self
                    .refresh_secret
                    .ok_or(ConfigError::MissingValue("REFRESH_TOKEN_SECRET"))?,
                refresh_expiry: self.refresh_expiry,
            },
            cloudinary: self
                .cloudinary
                .ok_or(ConfigError::MissingValue("CLOUDINARY_CLOUD_NAME"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
    #[error("access and refresh tokens must be signed with different secrets")]
    SharedSecret,
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::MissingValue(key))
}

fn check_expiry(key: &'static str, expiry: Duration) -> Result<(), ConfigError> {
    if expiry.is_zero() || expiry > MAX_TOKEN_EXPIRY {
        return Err(ConfigError::Invalid(
            key,
            humantime::format_duration(expiry).to_string(),
        ));
    }
    Ok(())
}

fn parse_expiry(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw).map_err(|_| ConfigError::Invalid(key, raw.to_string()))
}
