//! Token issuing, verification, and refresh.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Verification
//! checks signature and expiry with zero leeway; any failure (malformed,
//! wrong signature, expired) becomes the same 401 error so callers cannot
//! tell the cases apart.
//!
//! Refresh trusts the old token alone. It does not look the principal up
//! again, so a deleted admin can keep refreshing until its current token
//! expires. There is no revocation list.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use jobify_config::JwtConfig;
use jobify_core::AppError;

use crate::claims::{Claims, TokenPayload};

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

/// Signs `payload` with a fresh `iat` and `exp = iat + access_token_expiry`.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(payload: &TokenPayload, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;
    let claims = Claims::from_payload(payload, now, exp);

    encode_claims(&claims, jwt_config)
}

pub(crate) fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Decodes and checks a token.
///
/// # Errors
///
/// Returns the generic unauthorized error if the token is malformed, signed
/// with another secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::invalid_token())
}

/// Re-issues a still-valid token with the same identity and a new expiry.
///
/// # Errors
///
/// Same as [`verify_token`] for the old token.
pub fn refresh_token(old_token: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let claims = verify_token(old_token, jwt_config)?;
    issue_token(&claims.payload(), jwt_config)
}
