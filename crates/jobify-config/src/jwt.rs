//! JWT signing configuration.
//!
//! The secret is read once at process start and handed to the token issuer
//! through application state. It is never mutated and never printed: the
//! `Debug` impl redacts it, so `#[instrument]` spans that capture the state
//! stay clean.

use std::env;
use std::fmt;

const DEV_SECRET: &str = "jobify-dev-secret-change-in-production";

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, access_token_expiry: i64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry,
        }
    }

    /// Loads `JWT_SECRET` and `JWT_ACCESS_EXPIRY` (default one day).
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEV_SECRET.to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400),
        }
    }

    /// True when no secret was configured and the built-in development one is in use.
    pub fn uses_dev_secret(&self) -> bool {
        self.secret == DEV_SECRET
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
