//! Shared Error Types
//!
//! This module defines error types for request payload problems that are
//! detected before any store or token work happens.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field is missing or blank
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use videohub::shared::error::SharedError;
//!
//! let error = SharedError::validation("avatar", "Avatar file is required");
//! ```
use thiserror::Error;

/// Payload-level errors that map to 400 Bad Request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Returns the first field name whose value is missing or only whitespace
///
/// Used for the "all fields are required" checks on registration and login.
pub fn first_blank<'a>(fields: &[(&'a str, Option<&str>)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
}
