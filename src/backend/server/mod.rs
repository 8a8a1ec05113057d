//! Server Module
//!
//! Startup wiring for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - User store selection
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env()` in `main`
//! 2. **Store**: PostgreSQL when `DATABASE_URL` is set, in-memory otherwise
//! 3. **Services**: token issuer, media store, `AuthService`
//! 4. **Router**: routes, auth middleware, CORS, tracing, static files
//!
//! # Example
//!
//! ```rust,no_run
//! use videohub::backend::server::create_app;
//! use videohub::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// User store selection
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_app, create_app};
pub use state::AppState;
