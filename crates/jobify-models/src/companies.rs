//! Company (employer) records and DTOs.

use chrono::{DateTime, Utc};
use jobify_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCompanyDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub description: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
}

/// Profile update. Absent fields are left unchanged.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateCompanyDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCompaniesResponse {
    pub data: Vec<Company>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_company_dto_valid() {
        let dto = CreateCompanyDto {
            name: "Acme".to_string(),
            email: "hr@acme.com".to_string(),
            password: "secret123".to_string(),
            description: None,
            website: Some("https://acme.com".to_string()),
            location: Some("Lagos".to_string()),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_company_dto_rejects_bad_website() {
        let dto = CreateCompanyDto {
            name: "Acme".to_string(),
            email: "hr@acme.com".to_string(),
            password: "secret123".to_string(),
            description: None,
            website: Some("acme".to_string()),
            location: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_company_dto_rejects_empty_name() {
        let dto = UpdateCompanyDto {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
