//! Videohub - User Account Backend
//!
//! Registration with avatar and cover-image upload, credential login, and
//! sessions built on a short-lived access token plus a long-lived refresh
//! token that is rotated on every use.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, payload errors, and the response envelope
//!
//! - **`backend`** - Axum HTTP server
//!   - User store (PostgreSQL or in-memory)
//!   - Token issuing, verification, and rotation
//!   - Cloudinary media uploads
//!   - Auth middleware and error mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use videohub::backend::server::create_app;
//! use videohub::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # HTTP Surface
//!
//! All routes live under `/api/v1/users`: `register`, `login`,
//! `refresh-token`, `logout`, and `current-user`. Responses share one
//! envelope, `{statusCode, data, message, success}`.

pub mod shared;

pub mod backend;
