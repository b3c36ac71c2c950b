use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use jobify_auth::{PrincipalType, TokenPayload, issue_token};
use jobify_config::JwtConfig;
use jobify_core::{
    AppError, hash_password_blocking, unknown_account_hash, verify_password_blocking,
};
use jobify_models::{
    ChangePasswordDto, CredentialRecord, LoginRequest, LoginResponse, PrincipalProfile,
};
use jobify_observability::{track_jwt_issued, track_login_failure, track_login_success};

/// Checks the password against the record's hash. Without a record it still
/// pays for one bcrypt check, against a stand-in hash, and reports no match.
async fn password_matches(
    record: Option<&CredentialRecord>,
    password: String,
) -> Result<bool, AppError> {
    match record {
        Some(record) => verify_password_blocking(password, record.password_hash.clone()).await,
        None => {
            verify_password_blocking(password, unknown_account_hash().to_string()).await?;
            Ok(false)
        }
    }
}

pub struct AuthService;

impl AuthService {
    /// Looks up a credential record by exact email in the principal's table.
    pub async fn find_credentials(
        db: &PgPool,
        principal_type: PrincipalType,
        email: &str,
    ) -> Result<Option<CredentialRecord>, AppError> {
        let role_column = if principal_type.has_role() {
            "role"
        } else {
            "NULL::admin_role AS role"
        };
        let query = format!(
            "SELECT id, email, name, password_hash, {} FROM {} WHERE email = $1",
            role_column,
            principal_type.table()
        );

        let record = sqlx::query_as::<_, CredentialRecord>(&query)
            .bind(email)
            .fetch_optional(db)
            .await?;

        Ok(record)
    }

    /// Shared login flow. Unknown email and wrong password fail identically.
    #[instrument(skip_all, fields(principal_type = %principal_type, email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        principal_type: PrincipalType,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let record = Self::find_credentials(db, principal_type, &dto.email).await?;
        let matches = password_matches(record.as_ref(), dto.password).await?;

        let record = match record {
            Some(record) if matches => record,
            Some(_) => {
                warn!("Login rejected");
                track_login_failure(principal_type.as_str(), "wrong_password");
                return Err(AppError::invalid_credentials());
            }
            None => {
                track_login_failure(principal_type.as_str(), "unknown_email");
                return Err(AppError::invalid_credentials());
            }
        };

        let payload = TokenPayload::new(record.id, &record.email, principal_type, record.role);
        let access_token = issue_token(&payload, jwt_config)?;

        track_jwt_issued(principal_type.as_str());
        track_login_success(principal_type.as_str());
        info!(id = %record.id, "Login succeeded");

        Ok(LoginResponse {
            access_token,
            user: PrincipalProfile::from_record(&record, principal_type),
        })
    }

    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        Self::login(db, PrincipalType::User, dto, jwt_config).await
    }

    pub async fn login_company(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        Self::login(db, PrincipalType::Company, dto, jwt_config).await
    }

    pub async fn login_admin(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        Self::login(db, PrincipalType::Admin, dto, jwt_config).await
    }

    /// Re-hashes the password after checking the current one.
    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        principal_type: PrincipalType,
        id: Uuid,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let table = principal_type.table();

        let current_hash = sqlx::query_scalar::<_, String>(&format!(
            "SELECT password_hash FROM {} WHERE id = $1",
            table
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Account not found")))?;

        if !verify_password_blocking(dto.current_password, current_hash).await? {
            return Err(AppError::unauthorized(
                "Current password is incorrect".to_string(),
            ));
        }

        let new_hash = hash_password_blocking(dto.new_password).await?;

        sqlx::query(&format!(
            "UPDATE {} SET password_hash = $1, updated_at = NOW() WHERE id = $2",
            table
        ))
        .bind(&new_hash)
        .bind(id)
        .execute(db)
        .await?;

        info!("Password changed");
        Ok(())
    }
}
