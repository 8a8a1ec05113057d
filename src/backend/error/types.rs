/**
 * Backend Error Types
 *
 * This module defines the error type every core operation returns. Each
 * variant carries the message shown to the caller; `Upstream` and `Internal`
 * also carry a `detail` that is logged but never sent over the wire.
 *
 * # Status Code Mapping
 *
 * - `Validation` - 400 Bad Request
 * - `Unauthenticated` - 401 Unauthorized
 * - `NotFound` - 404 Not Found
 * - `Conflict` - 409 Conflict
 * - `Upstream` - 500 Internal Server Error (media store failure)
 * - `Internal` - 500 Internal Server Error
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::users::StoreError;
use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or blank required input
    #[error("{0}")]
    Validation(String),

    /// Duplicate username or email
    #[error("{0}")]
    Conflict(String),

    /// Missing, invalid, expired or superseded credentials
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    NotFound(String),

    /// The media store failed
    #[error("{message}: {detail}")]
    Upstream {
        /// Message returned to the caller
        message: String,
        /// Cause, logged only
        detail: String,
    },

    /// Unexpected store or issuer failure
    #[error("{message}: {detail}")]
    Internal {
        /// Message returned to the caller
        message: String,
        /// Cause, logged only
        detail: String,
    },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Upstream {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message safe to return to the caller
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::Conflict(message)
            | Self::Unauthenticated(message)
            | Self::NotFound(message) => message,
            Self::Upstream { message, .. } | Self::Internal { message, .. } => message,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::Validation(message),
            SharedError::SerializationError { message } => Self::Validation(message),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Self::conflict("User with email or username already exists"),
            StoreError::NotFound(_) => Self::not_found("User does not exist"),
            other => Self::internal("Something went wrong while accessing user records", other),
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::internal("Something went wrong while processing credentials", err)
    }
}
