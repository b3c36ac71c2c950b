//! Principal kinds and admin roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The kind of identity a token belongs to.
///
/// Each kind keeps its credentials in its own table; [`PrincipalType::table`]
/// is the only place that mapping lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalType {
    User,
    Company,
    Admin,
}

impl PrincipalType {
    pub const ALL: [PrincipalType; 3] = [Self::User, Self::Company, Self::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }

    /// Credential table for this principal type.
    pub fn table(&self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Company => "companies",
            Self::Admin => "admins",
        }
    }

    /// Only admins carry a role.
    pub fn has_role(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrincipalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "company" => Ok(Self::Company),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unknown principal type: {}", other)),
        }
    }
}

/// Role attached to admin principals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "admin_role", rename_all = "lowercase")]
pub enum AdminRole {
    Superadmin,
    Moderator,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Moderator => "moderator",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Self::Superadmin),
            "moderator" => Ok(Self::Moderator),
            other => Err(format!("Unknown admin role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_distinct() {
        assert_eq!(PrincipalType::User.table(), "users");
        assert_eq!(PrincipalType::Company.table(), "companies");
        assert_eq!(PrincipalType::Admin.table(), "admins");
    }

    #[test]
    fn test_only_admin_has_role() {
        assert!(PrincipalType::Admin.has_role());
        assert!(!PrincipalType::User.has_role());
        assert!(!PrincipalType::Company.has_role());
    }

    #[test]
    fn test_principal_type_serializes_lowercase() {
        let json = serde_json::to_string(&PrincipalType::Company).unwrap();
        assert_eq!(json, r#""company""#);
    }

    #[test]
    fn test_principal_type_parse_round_trip() {
        for principal_type in PrincipalType::ALL {
            assert_eq!(principal_type.as_str().parse::<PrincipalType>(), Ok(principal_type));
        }
        assert!("recruiter".parse::<PrincipalType>().is_err());
    }

    #[test]
    fn test_admin_role_parse() {
        assert_eq!("superadmin".parse::<AdminRole>(), Ok(AdminRole::Superadmin));
        assert_eq!("moderator".parse::<AdminRole>(), Ok(AdminRole::Moderator));
        assert!("SUPERADMIN".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_admin_role_serializes_lowercase() {
        let json = serde_json::to_string(&AdminRole::Moderator).unwrap();
        assert_eq!(json, r#""moderator""#);
    }
}
