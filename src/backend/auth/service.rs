/**
 * Session Lifecycle
 *
 * `AuthService` drives the per-user refresh token through its two states:
 *
 * ```text
 *   NoSession ──login──▶ ActiveSession ──refresh──▶ ActiveSession (rotated)
 *       ▲                      │
 *       └────────logout────────┘
 * ```
 *
 * The stored refresh token is the single source of truth. A refresh token
 * that verifies cryptographically but is not the stored one is treated as a
 * replay of a superseded token and rejected.
 *
 * Registration also lives here: it is the only path that creates an
 * identity, and it must not create one unless the avatar upload succeeded.
 */

use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::password::{hash_password, verify_against_dummy, verify_password};
use crate::backend::auth::sessions::{TokenError, TokenIssuer, TokenPair};
use crate::backend::auth::users::{NewUser, UserResponse, UserStore};
use crate::backend::error::BackendError;
use crate::backend::media::{self, MediaStore};
use crate::shared::error::first_blank;
use crate::shared::SharedError;

const INVALID_CREDENTIALS: &str = "Invalid user credentials";
const INVALID_ACCESS_TOKEN: &str = "Invalid access token";
const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";
const STALE_REFRESH_TOKEN: &str = "Refresh token is expired or used";

/// Registration fields as delivered by the transport layer
///
/// File fields are paths to temporary spool files. The service owns them
/// from here on and deletes them whatever the outcome.
#[derive(Debug, Default, Clone)]
pub struct RegisterInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<PathBuf>,
    pub cover_image: Option<PathBuf>,
}

/// Result of a login or refresh
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: UserResponse,
    pub tokens: TokenPair,
}

pub struct AuthService {
    store: Arc<dyn UserStore>,
    media: Arc<dyn MediaStore>,
    issuer: TokenIssuer,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, media: Arc<dyn MediaStore>, issuer: TokenIssuer) -> Self {
        Self {
            store,
            media,
            issuer,
        }
    }

    /// Create a new identity in `NoSession`
    pub async fn register(&self, input: RegisterInput) -> Result<UserResponse, BackendError> {
        let result = self.create_identity(&input).await;

        // Uploaded files are already gone; this catches the ones an earlier
        // failure never got to.
        for path in input.avatar.iter().chain(input.cover_image.iter()) {
            media::discard(path).await;
        }

        result
    }

    async fn create_identity(&self, input: &RegisterInput) -> Result<UserResponse, BackendError> {
        if let Some(field) = first_blank(&[
            ("fullName", input.full_name.as_deref()),
            ("email", input.email.as_deref()),
            ("username", input.username.as_deref()),
            ("password", input.password.as_deref()),
        ]) {
            return Err(SharedError::validation(field, "All fields are required").into());
        }
        let full_name = input.full_name.as_deref().unwrap_or_default();
        let email = input.email.as_deref().unwrap_or_default();
        let username = input.username.as_deref().unwrap_or_default();
        let password = input.password.as_deref().unwrap_or_default();

        if self
            .store
            .find_by_username_or_email(Some(username), Some(email))
            .await?
            .is_some()
        {
            tracing::warn!("Registration rejected, username or email taken: {}", username);
            return Err(BackendError::conflict("User with email or username already exists"));
        }

        let avatar_path = input
            .avatar
            .as_deref()
            .ok_or_else(|| BackendError::validation("Avatar file is required"))?;

        let avatar = media::upload_and_cleanup(self.media.as_ref(), avatar_path)
            .await
            .map_err(|e| BackendError::upstream("Error uploading avatar, please try again", e))?;

        let cover_image = match input.cover_image.as_deref() {
            Some(path) => Some(
                media::upload_and_cleanup(self.media.as_ref(), path)
                    .await
                    .map_err(|e| {
                        BackendError::upstream("Error uploading cover image, please try again", e)
                    })?
                    .url,
            ),
            None => None,
        };

        let password_hash = hash_password(password)?;
        let user = self
            .store
            .create(NewUser::new(
                username,
                email,
                full_name,
                avatar.url,
                cover_image,
                password_hash,
            ))
            .await?;

        tracing::info!("User registered: {} ({})", user.username, user.id);
        Ok(user.into())
    }

    /// `NoSession`/`ActiveSession` → `ActiveSession`
    ///
    /// Unknown identity and wrong password fail identically.
    pub async fn login(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthSession, BackendError> {
        let username = username.filter(|u| !u.trim().is_empty());
        let email = email.filter(|e| !e.trim().is_empty());
        if username.is_none() && email.is_none() {
            return Err(BackendError::validation("username or email is required"));
        }
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| BackendError::validation("password is required"))?;

        let user = match self.store.find_by_username_or_email(username, email).await? {
            Some(user) => user,
            None => {
                verify_against_dummy(password);
                tracing::warn!("Login failed: no such user");
                return Err(BackendError::unauthenticated(INVALID_CREDENTIALS));
            }
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!("Login failed: wrong password for {}", user.id);
            return Err(BackendError::unauthenticated(INVALID_CREDENTIALS));
        }

        let tokens = self.issuer.issue_pair(&user).map_err(issue_failed)?;
        self.store
            .set_refresh_token(user.id, Some(&tokens.refresh_token))
            .await?;

        tracing::info!("User logged in: {} ({})", user.username, user.id);
        Ok(AuthSession {
            user: user.into(),
            tokens,
        })
    }

    /// `ActiveSession` → `ActiveSession` with a new token pair
    ///
    /// The presented token must verify and must equal the stored token. The
    /// swap itself is a compare-and-set, so of two concurrent refreshes with
    /// the same token exactly one succeeds.
    pub async fn refresh(&self, incoming: Option<&str>) -> Result<AuthSession, BackendError> {
        let incoming = incoming
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BackendError::unauthenticated("Unauthorized request"))?;

        let claims = self.issuer.verify_refresh(incoming).map_err(|e| {
            tracing::warn!("Refresh token rejected: {}", e);
            BackendError::unauthenticated(INVALID_REFRESH_TOKEN)
        })?;

        let user = self
            .store
            .find_by_id(claims.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Refresh token for unknown user {}", claims.id);
                BackendError::unauthenticated(INVALID_REFRESH_TOKEN)
            })?;

        if user.refresh_token.as_deref() != Some(incoming) {
            tracing::warn!("Superseded refresh token presented for {}", user.id);
            return Err(BackendError::unauthenticated(STALE_REFRESH_TOKEN));
        }

        let tokens = self.issuer.issue_pair(&user).map_err(issue_failed)?;
        let rotated = self
            .store
            .rotate_refresh_token(user.id, incoming, &tokens.refresh_token)
            .await?;
        if !rotated {
            tracing::warn!("Lost refresh race for {}", user.id);
            return Err(BackendError::unauthenticated(STALE_REFRESH_TOKEN));
        }

        tracing::info!("Session refreshed for {}", user.id);
        Ok(AuthSession {
            user: user.into(),
            tokens,
        })
    }

    /// `ActiveSession` → `NoSession`
    pub async fn logout(&self, user_id: Uuid) -> Result<(), BackendError> {
        self.store.set_refresh_token(user_id, None).await?;
        tracing::info!("User logged out: {}", user_id);
        Ok(())
    }

    /// Resolve an access token to the public view of a live identity
    ///
    /// Never touches the refresh token. Every failure is the same generic
    /// 401; the cause is logged.
    pub async fn verify_access(&self, token: &str) -> Result<UserResponse, BackendError> {
        let claims = self.issuer.verify_access(token).map_err(|e| {
            tracing::warn!("Access token rejected: {}", e);
            BackendError::unauthenticated(INVALID_ACCESS_TOKEN)
        })?;

        match self.store.find_by_id(claims.id).await? {
            Some(user) => Ok(user.into()),
            None => {
                tracing::warn!("Access token for unknown user {}", claims.id);
                Err(BackendError::unauthenticated(INVALID_ACCESS_TOKEN))
            }
        }
    }
}

fn issue_failed(err: TokenError) -> BackendError {
    BackendError::internal("Something went wrong while generating tokens", err)
}
