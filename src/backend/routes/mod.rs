//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - /api/v1/users endpoints
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - `/api/v1/users/*`
//! 2. **Fallback** - static files from `public/`

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
