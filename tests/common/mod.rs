//! Common test utilities and helpers
//!
//! - Test application over an in-memory store and a recording media store
//! - Registration and login helpers
//! - Cloudinary mock server
//! - PostgreSQL fixtures, enabled by `TEST_DATABASE_URL`
//! - Envelope assertions

#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod mock_server;

pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
pub use mock_server::*;
