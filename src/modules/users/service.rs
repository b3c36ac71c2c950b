use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use jobify_core::{AppError, PaginationMeta, PaginationParams, hash_password_blocking};
use jobify_db::is_unique_violation;
use jobify_models::{CreateUserDto, PaginatedUsersResponse, UpdateUserDto, User};
use jobify_observability::track_principal_created;

const USER_COLUMNS: &str =
    "id, name, email, phone, avatar_url, resume_url, created_at, updated_at";

fn write_error(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        AppError::email_taken()
    } else {
        AppError::database(err)
    }
}

fn user_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("User not found"))
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let password_hash = hash_password_blocking(dto.password).await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password_hash, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(&dto.phone)
        .fetch_one(db)
        .await
        .map_err(write_error)?;

        track_principal_created("user");
        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        pagination: PaginationParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;

        let data = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            USER_COLUMNS
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedUsersResponse {
            data,
            meta: PaginationMeta::new(&pagination, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(user_not_found)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: Uuid, dto: UpdateUserDto) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                name = COALESCE($1, name),
                email = COALESCE($2, email),
                phone = COALESCE($3, phone),
                avatar_url = COALESCE($4, avatar_url),
                resume_url = COALESCE($5, resume_url),
                updated_at = NOW()
             WHERE id = $6
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.avatar_url)
        .bind(&dto.resume_url)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(write_error)?
        .ok_or_else(user_not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(user_not_found());
        }
        Ok(())
    }
}
