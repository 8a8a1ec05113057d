//! Authentication Handlers Module
//!
//! Thin axum handlers: each one unpacks the transport (multipart, JSON,
//! cookies), calls `AuthService`, and wraps the result in the response
//! envelope.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - Multipart registration
//! ├── login.rs     - Credential login
//! ├── refresh.rs   - Token rotation
//! ├── logout.rs    - Session end
//! └── me.rs        - Current user
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/users/register
//! - **`login`** - POST /api/v1/users/login
//! - **`refresh_access_token`** - POST /api/v1/users/refresh-token
//! - **`logout`** - POST /api/v1/users/logout (authenticated)
//! - **`get_current_user`** - GET /api/v1/users/current-user (authenticated)

/// Request and response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Token refresh handler
pub mod refresh;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

pub use login::login;
pub use logout::logout;
pub use me::get_current_user;
pub use refresh::refresh_access_token;
pub use register::register;
