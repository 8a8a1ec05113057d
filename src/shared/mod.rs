//! Shared Module
//!
//! Types that are not tied to a particular transport or store: the response
//! envelope every endpoint returns, payload validation errors and the
//! environment-sourced application configuration.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// JSON response envelope
pub mod response;

pub use config::{AppConfig, AppConfigBuilder, AuthConfig, CloudinaryConfig, ConfigError};
pub use error::SharedError;
pub use response::ApiResponse;
