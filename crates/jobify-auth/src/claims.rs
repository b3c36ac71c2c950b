//! JWT claim structures.
//!
//! [`TokenPayload`] is the identity a token asserts. [`Claims`] is what is
//! actually signed: the payload plus issue and expiry timestamps.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::principal::{AdminRole, PrincipalType};

/// Identity asserted by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenPayload {
    /// Credential record id (subject claim)
    pub sub: String,
    pub email: String,
    #[serde(rename = "type")]
    pub principal_type: PrincipalType,
    /// Present for admin principals only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
}

impl TokenPayload {
    pub fn new(
        id: Uuid,
        email: &str,
        principal_type: PrincipalType,
        role: Option<AdminRole>,
    ) -> Self {
        Self {
            sub: id.to_string(),
            email: email.to_string(),
            principal_type,
            role: if principal_type.has_role() { role } else { None },
        }
    }
}

/// Signed claim set carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Credential record id (subject claim)
    pub sub: String,
    pub email: String,
    #[serde(rename = "type")]
    pub principal_type: PrincipalType,
    /// Present for admin principals only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiration (Unix timestamp)
    pub exp: usize,
}

impl Claims {
    pub fn from_payload(payload: &TokenPayload, iat: usize, exp: usize) -> Self {
        Self {
            sub: payload.sub.clone(),
            email: payload.email.clone(),
            principal_type: payload.principal_type,
            role: payload.role,
            iat,
            exp,
        }
    }

    /// The identity part, without timestamps.
    pub fn payload(&self) -> TokenPayload {
        TokenPayload {
            sub: self.sub.clone(),
            email: self.email.clone(),
            principal_type: self.principal_type,
            role: self.role,
        }
    }

    pub fn subject_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}
