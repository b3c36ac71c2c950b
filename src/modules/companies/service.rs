use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use jobify_core::{AppError, PaginationMeta, PaginationParams, hash_password_blocking};
use jobify_db::is_unique_violation;
use jobify_models::{Company, CreateCompanyDto, PaginatedCompaniesResponse, UpdateCompanyDto};
use jobify_observability::track_principal_created;

const COMPANY_COLUMNS: &str =
    "id, name, email, description, website, logo_url, location, created_at, updated_at";

fn write_error(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        AppError::email_taken()
    } else {
        AppError::database(err)
    }
}

fn company_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Company not found"))
}

pub struct CompanyService;

impl CompanyService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn create_company(db: &PgPool, dto: CreateCompanyDto) -> Result<Company, AppError> {
        let password_hash = hash_password_blocking(dto.password).await?;

        let company = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (name, email, password_hash, description, website, location)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            COMPANY_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(&dto.description)
        .bind(&dto.website)
        .bind(&dto.location)
        .fetch_one(db)
        .await
        .map_err(write_error)?;

        track_principal_created("company");
        Ok(company)
    }

    #[instrument(skip(db))]
    pub async fn get_companies(
        db: &PgPool,
        pagination: PaginationParams,
    ) -> Result<PaginatedCompaniesResponse, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
            .fetch_one(db)
            .await?;

        let data = sqlx::query_as::<_, Company>(&format!(
            "SELECT {} FROM companies ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            COMPANY_COLUMNS
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedCompaniesResponse {
            data,
            meta: PaginationMeta::new(&pagination, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_company(db: &PgPool, id: Uuid) -> Result<Company, AppError> {
        sqlx::query_as::<_, Company>(&format!(
            "SELECT {} FROM companies WHERE id = $1",
            COMPANY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(company_not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_company(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCompanyDto,
    ) -> Result<Company, AppError> {
        sqlx::query_as::<_, Company>(&format!(
            "UPDATE companies SET
                name = COALESCE($1, name),
                email = COALESCE($2, email),
                description = COALESCE($3, description),
                website = COALESCE($4, website),
                logo_url = COALESCE($5, logo_url),
                location = COALESCE($6, location),
                updated_at = NOW()
             WHERE id = $7
             RETURNING {}",
            COMPANY_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.description)
        .bind(&dto.website)
        .bind(&dto.logo_url)
        .bind(&dto.location)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(write_error)?
        .ok_or_else(company_not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete_company(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(company_not_found());
        }
        Ok(())
    }
}
