//! Backend Module
//!
//! All server-side code: the Axum HTTP server, user accounts and sessions,
//! media uploads, middleware, and error mapping.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization and application state
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, passwords, tokens, and the session lifecycle
//! - **`media`** - External media hosting (Cloudinary)
//! - **`middleware`** - Access-token gate
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── media/          - Media store
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an `Arc<AuthService>` and the upload spool directory.
//! There is no other in-process mutable state; per-user session state lives
//! in the `UserStore`.
//!
//! # Error Handling
//!
//! Core operations return `Result<T, BackendError>`. `BackendError`
//! implements `IntoResponse`, producing the same JSON envelope successful
//! responses use.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// External media hosting
pub mod media;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::create_app;
