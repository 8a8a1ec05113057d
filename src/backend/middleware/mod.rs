//! Middleware Module
//!
//! HTTP middleware applied in front of handlers.
//!
//! - **`auth`** - Access-token gate for routes that need a logged-in user
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use videohub::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/current-user", get(get_current_user))
//!     .route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
