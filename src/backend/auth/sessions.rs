/**
 * Session Tokens
 *
 * Issues and verifies the two JWT kinds:
 *
 * - **Access token**: `{id, email, username, fullName}`, short-lived,
 *   signed with `ACCESS_TOKEN_SECRET`
 * - **Refresh token**: `{id, jti}`, long-lived, signed with `REFRESH_TOKEN_SECRET`
 *
 * Issuing a pair does not persist anything; storing the refresh token is
 * the caller's job (see `service::AuthService`).
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::config::AuthConfig;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// User ID
    pub id: Uuid,
    pub email: String,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Claims carried by a refresh token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshClaims {
    /// User ID
    pub id: Uuid,
    /// Unique per token so two pairs minted in the same second still differ
    pub jti: Uuid,
    pub iat: u64,
    pub exp: u64,
}

/// Freshly minted access/refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("token invalid: {0}")]
    Invalid(jsonwebtoken::errors::Error),

    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("system clock is before the Unix epoch")]
    Clock,

    #[error("token lifetime of {0:?} overflows the expiry timestamp")]
    ExpiryOverflow(Duration),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(err),
        }
    }
}

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl KeyPair {
    fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    fn expires_at(&self, now: u64) -> Result<u64, TokenError> {
        now.checked_add(self.ttl.as_secs())
            .ok_or(TokenError::ExpiryOverflow(self.ttl))
    }
}

/// Signs and verifies access and refresh tokens
///
/// Built once from `AuthConfig` and shared; signing and verification are
/// pure CPU work and need no locking.
pub struct TokenIssuer {
    access: KeyPair,
    refresh: KeyPair,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            access: KeyPair::new(&config.access_secret, config.access_expiry),
            refresh: KeyPair::new(&config.refresh_secret, config.refresh_expiry),
            validation,
        }
    }

    /// Mint a new access/refresh pair for `user`
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        let now = now_secs()?;

        let access_claims = AccessClaims {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            iat: now,
            exp: self.access.expires_at(now)?,
        };
        let refresh_claims = RefreshClaims {
            id: user.id,
            jti: Uuid::new_v4(),
            iat: now,
            exp: self.refresh.expires_at(now)?,
        };

        let header = Header::new(Algorithm::HS256);
        Ok(TokenPair {
            access_token: encode(&header, &access_claims, &self.access.encoding)
                .map_err(TokenError::Signing)?,
            refresh_token: encode(&header, &refresh_claims, &self.refresh.encoding)
                .map_err(TokenError::Signing)?,
        })
    }

    /// Verify signature and expiry of an access token
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        Ok(decode::<AccessClaims>(token, &self.access.decoding, &self.validation)?.claims)
    }

    /// Verify signature and expiry of a refresh token
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        Ok(decode::<RefreshClaims>(token, &self.refresh.decoding, &self.validation)?.claims)
    }
}

fn now_secs() -> Result<u64, TokenError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(|_| TokenError::Clock)
}
