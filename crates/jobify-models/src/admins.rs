//! Administrator records, DTOs and system statistics.

use chrono::{DateTime, Utc};
use jobify_auth::AdminRole;
use jobify_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Admin {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_role() -> AdminRole {
    AdminRole::Moderator
}

/// New administrator. Role defaults to `moderator`.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateAdminDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[serde(default = "default_role")]
    pub role: AdminRole,
}

#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateAdminDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<AdminRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAdminsResponse {
    pub data: Vec<Admin>,
    pub meta: PaginationMeta,
}

/// Totals for one principal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PrincipalCounts {
    pub total: i64,
    pub new_this_month: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SystemStats {
    pub users: PrincipalCounts,
    pub companies: PrincipalCounts,
    pub total_admins: i64,
}
