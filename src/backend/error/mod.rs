//! Backend Error Module
//!
//! Every core operation returns `Result<T, BackendError>`; the transport
//! boundary turns the error into a status code and JSON envelope.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
