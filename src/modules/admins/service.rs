use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use jobify_core::{AppError, PaginationMeta, PaginationParams, hash_password_blocking};
use jobify_db::is_unique_violation;
use jobify_models::{
    Admin, CreateAdminDto, PaginatedAdminsResponse, PrincipalCounts, SystemStats, UpdateAdminDto,
};
use jobify_observability::track_principal_created;

const ADMIN_COLUMNS: &str = "id, name, email, role, created_at, updated_at";

fn write_error(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        AppError::email_taken()
    } else {
        AppError::database(err)
    }
}

fn admin_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Admin not found"))
}

pub struct AdminService;

impl AdminService {
    #[instrument(skip(db, dto), fields(email = %dto.email, role = %dto.role))]
    pub async fn create_admin(db: &PgPool, dto: CreateAdminDto) -> Result<Admin, AppError> {
        let password_hash = hash_password_blocking(dto.password).await?;

        let admin = sqlx::query_as::<_, Admin>(&format!(
            "INSERT INTO admins (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            ADMIN_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(dto.role)
        .fetch_one(db)
        .await
        .map_err(write_error)?;

        track_principal_created("admin");
        info!(id = %admin.id, "Admin created");
        Ok(admin)
    }

    #[instrument(skip(db))]
    pub async fn get_admins(
        db: &PgPool,
        pagination: PaginationParams,
    ) -> Result<PaginatedAdminsResponse, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(db)
            .await?;

        let data = sqlx::query_as::<_, Admin>(&format!(
            "SELECT {} FROM admins ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            ADMIN_COLUMNS
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedAdminsResponse {
            data,
            meta: PaginationMeta::new(&pagination, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_admin(db: &PgPool, id: Uuid) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(&format!(
            "SELECT {} FROM admins WHERE id = $1",
            ADMIN_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(admin_not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_admin(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAdminDto,
    ) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(&format!(
            "UPDATE admins SET
                name = COALESCE($1, name),
                email = COALESCE($2, email),
                role = COALESCE($3, role),
                updated_at = NOW()
             WHERE id = $4
             RETURNING {}",
            ADMIN_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(dto.role)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(write_error)?
        .ok_or_else(admin_not_found)
    }

    /// Existing tokens of a deleted admin stay valid until they expire.
    #[instrument(skip(db))]
    pub async fn delete_admin(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(admin_not_found());
        }
        Ok(())
    }

    async fn principal_counts(db: &PgPool, table: &str) -> Result<PrincipalCounts, AppError> {
        let counts = sqlx::query_as::<_, PrincipalCounts>(&format!(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE created_at >= date_trunc('month', NOW())) AS new_this_month
             FROM {}",
            table
        ))
        .fetch_one(db)
        .await?;

        Ok(counts)
    }

    #[instrument(skip(db))]
    pub async fn get_system_stats(db: &PgPool) -> Result<SystemStats, AppError> {
        let users = Self::principal_counts(db, "users").await?;
        let companies = Self::principal_counts(db, "companies").await?;
        let total_admins = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(db)
            .await?;

        Ok(SystemStats {
            users,
            companies,
            total_admins,
        })
    }
}
