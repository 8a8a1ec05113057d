//! Authentication Module
//!
//! User accounts and the dual-token session lifecycle: registration,
//! login, refresh-token rotation, logout, and access-token verification.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing behind the `PasswordHash` newtype
//! - **`users`** - User model and the `UserStore` persistence contract
//! - **`pg_store`** / **`memory_store`** - `UserStore` implementations
//! - **`sessions`** - Access/refresh JWT issuing and verification
//! - **`cookie`** - Token cookies and bearer header parsing
//! - **`service`** - `AuthService`, the session state machine
//! - **`handlers`** - HTTP handlers for the user endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── password.rs      - Password hashing
//! ├── users.rs         - User model and store trait
//! ├── pg_store.rs      - PostgreSQL store
//! ├── memory_store.rs  - In-memory store
//! ├── sessions.rs      - JWT token management
//! ├── cookie.rs        - Cookie helpers
//! ├── service.rs       - Session lifecycle
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Session Lifecycle
//!
//! 1. **Register**: fields validated → uniqueness checked → avatar uploaded → user created, no session
//! 2. **Login**: credentials verified → token pair issued → refresh token stored
//! 3. **Refresh**: presented token verified and equal to the stored one → new pair issued → stored token swapped
//! 4. **Logout**: stored refresh token cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before they reach a store
//! - Access and refresh tokens are signed with different secrets
//! - A refresh token is usable once; replaying a rotated token fails
//! - Invalid credentials return 401 without saying which part was wrong

/// Password hashing
pub mod password;

/// User data model and store contract
pub mod users;

/// PostgreSQL user store
pub mod pg_store;

/// In-memory user store
pub mod memory_store;

/// JWT token management
pub mod sessions;

/// Token cookies
pub mod cookie;

/// Session lifecycle
pub mod service;

/// HTTP handlers for authentication
pub mod handlers;

pub use memory_store::MemoryUserStore;
pub use pg_store::PgUserStore;
pub use service::{AuthService, AuthSession, RegisterInput};
pub use sessions::{TokenIssuer, TokenPair};
pub use users::{StoreError, User, UserResponse, UserStore};
