//! In-memory `UserStore`
//!
//! Backs the test suites and the server when `DATABASE_URL` is not set.
//! All mutations happen under a single write lock, which gives the same
//! per-record atomicity the PostgreSQL store gets from single-row UPDATEs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{
    normalize_email, normalize_username, NewUser, StoreError, User, UserStore,
};

#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, StoreError> {
        let username = username.map(normalize_username);
        let email = email.map(normalize_email);

        let users = self.users.read().await;
        let found = users.values().find(|user| {
            username.as_deref() == Some(user.username.as_str())
                || email.as_deref() == Some(user.email.as_str())
        });
        Ok(found.cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|existing| existing.username == user.username || existing.email == user.email)
        {
            return Err(StoreError::Conflict);
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            avatar: user.avatar,
            cover_image: user.cover_image,
            watch_history: Vec::new(),
            password_hash: user.password_hash,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        user.refresh_token = token.map(str::to_string);
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        current: &str,
        next: &str,
    ) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if user.refresh_token.as_deref() != Some(current) {
            return Ok(false);
        }
        user.refresh_token = Some(next.to_string());
        user.updated_at = Utc::now();
        Ok(true)
    }
}
