/**
 * User Model and Store Contract
 *
 * This module defines the durable user record, the public view of it and the
 * `UserStore` trait the rest of the backend talks to. Two implementations
 * exist: `PgUserStore` (PostgreSQL via sqlx) and `MemoryUserStore`.
 *
 * # Invariants every store upholds
 *
 * - `username` and `email` are unique; a clashing insert is `StoreError::Conflict`
 * - `password_hash` is only ever written by `create`
 * - every mutation bumps `updated_at`
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::password::PasswordHash;

/// User record as stored
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID (UUID), assigned at creation
    pub id: Uuid,
    /// Lower-cased, trimmed username (unique)
    pub username: String,
    /// Trimmed email address (unique)
    pub email: String,
    pub full_name: String,
    /// URL of the uploaded avatar
    pub avatar: String,
    /// URL of the uploaded cover image, if one was supplied
    pub cover_image: Option<String>,
    /// Watched video ids; starts empty
    pub watch_history: Vec<Uuid>,
    /// Hashed password (bcrypt)
    pub password_hash: PasswordHash,
    /// Most recently issued refresh token, `None` when logged out
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a user that does not exist yet
///
/// Holding a `PasswordHash` instead of a plaintext string guarantees the
/// password was hashed before it reached any store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub password_hash: PasswordHash,
}

impl NewUser {
    pub fn new(
        username: &str,
        email: &str,
        full_name: &str,
        avatar: String,
        cover_image: Option<String>,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            username: normalize_username(username),
            email: normalize_email(email),
            full_name: full_name.trim().to_string(),
            avatar,
            cover_image,
            password_hash,
        }
    }
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash or the refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub watch_history: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            avatar: user.avatar,
            cover_image: user.cover_image,
            watch_history: user.watch_history,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Usernames are case-insensitive; they are stored and looked up lower-cased
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_string()
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index (username or email) rejected the write
    #[error("user with email or username already exists")]
    Conflict,

    #[error("user {0} not found")]
    NotFound(Uuid),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence contract for user identities
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user whose username OR email matches
    ///
    /// Either argument may be `None`; with both `None` nothing matches.
    /// Arguments are normalised the same way `NewUser::new` normalises.
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a new user with no refresh token
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Overwrite (or clear, with `None`) the stored refresh token
    ///
    /// Does not touch the password hash.
    async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> Result<(), StoreError>;

    /// Atomically replace `current` with `next`
    ///
    /// Returns `false`, and leaves the record untouched, when the stored
    /// token is no longer `current`. This is the only guard against two
    /// concurrent refreshes presenting the same token.
    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        current: &str,
        next: &str,
    ) -> Result<bool, StoreError>;
}
