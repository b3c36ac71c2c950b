//! Password hashing with bcrypt.
//!
//! Hashes are salted, so hashing the same password twice yields two different
//! strings. Verification never fails: anything other than a match, including a
//! stored value that is not a bcrypt hash, is reported as `false`.
//!
//! bcrypt is deliberately slow. Async callers should use the `_blocking`
//! variants, which move the work onto Tokio's blocking pool.

use std::sync::LazyLock;

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// Work factor used for every stored hash.
pub const BCRYPT_COST: u32 = 10;

static UNKNOWN_ACCOUNT_HASH: LazyLock<String> =
    LazyLock::new(|| hash("unknown-account", BCRYPT_COST).unwrap_or_default());

/// A hash with the same cost as stored hashes, checked when no account
/// matches a login. Only the time spent matters; the result is discarded.
pub fn unknown_account_hash() -> &'static str {
    &UNKNOWN_ACCOUNT_HASH
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    match verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be checked");
            false
        }
    }
}

/// Hashes on the blocking pool so other requests keep running.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::internal_error(format!("Password hashing task failed: {}", e)))?
}

/// Verifies on the blocking pool so other requests keep running.
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::internal_error(format!("Password verification task failed: {}", e)))
}
