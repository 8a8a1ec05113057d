/**
 * Password Hashing
 *
 * The only way to produce a `PasswordHash` is `hash_password`, so any write
 * that carries a password field has necessarily hashed it first. Writes that
 * only touch the refresh token never see a `PasswordHash` and therefore never
 * re-hash.
 *
 * # Security
 *
 * - bcrypt with a fixed cost of 10 (salted, one-way)
 * - Verification goes through `bcrypt::verify`, never a string comparison
 */

use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// A bcrypt hash of a password
///
/// `Debug` is redacted so a hash never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a hash that was read back from storage
    pub fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Hash a plaintext password
pub fn hash_password(plain: &str) -> Result<PasswordHash, PasswordError> {
    Ok(PasswordHash(bcrypt::hash(plain, HASH_COST)?))
}

/// Check a plaintext password against a stored hash
///
/// A malformed stored hash is an error rather than a mismatch, so callers
/// can tell corruption apart from a wrong password.
pub fn verify_password(plain: &str, hash: &PasswordHash) -> Result<bool, PasswordError> {
    Ok(bcrypt::verify(plain, hash.as_str())?)
}

/// Spend the same bcrypt work as `verify_password` without a stored hash
///
/// Used when a login names no known user, so the response time does not
/// reveal whether the username or email exists.
pub fn verify_against_dummy(plain: &str) {
    static DUMMY: OnceLock<Option<PasswordHash>> = OnceLock::new();
    let dummy = DUMMY.get_or_init(|| hash_password("dummy-password-for-timing").ok());
    if let Some(hash) = dummy {
        let _ = verify_password(plain, hash);
    }
}
