use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use uuid::Uuid;

use jobify_auth::{AdminRole, Claims, PrincipalType, verify_token};
use jobify_core::AppError;

use crate::state::AppState;

/// Verified token claims for the current request.
///
/// The route guard inserts it into request extensions; extracting it on a
/// route the guard did not cover verifies the header directly.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub Claims);

impl AuthPrincipal {
    /// Record id from the `sub` claim.
    pub fn id(&self) -> Result<Uuid, AppError> {
        self.0.subject_id().ok_or_else(AppError::invalid_token)
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn principal_type(&self) -> PrincipalType {
        self.0.principal_type
    }

    pub fn role(&self) -> Option<AdminRole> {
        self.0.role
    }
}

/// Token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format".to_string()))
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(principal) = parts.extensions.get::<AuthPrincipal>() {
            return Ok(principal.clone());
        }

        let token = bearer_token(&parts.headers)?;
        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthPrincipal(claims))
    }
}
