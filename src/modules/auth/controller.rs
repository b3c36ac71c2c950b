use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use tracing::instrument;

use jobify_auth::verify_token;
use jobify_core::AppError;
use jobify_models::{ErrorResponse, LoginRequest, LoginResponse, RefreshResponse, ValidateResponse};
use jobify_observability::{track_jwt_issued, track_jwt_validation};

use super::service::AuthService;
use crate::middleware::auth::{AuthPrincipal, bearer_token};
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Log in as a job seeker
#[utoipa::path(
    post,
    path = "/auth/login/user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Log in as a company
#[utoipa::path(
    post,
    path = "/auth/login/company",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_company(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_company(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Log in as an administrator
#[utoipa::path(
    post,
    path = "/auth/login/admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, role included", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_admin(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Check a bearer token and return its claims
#[utoipa::path(
    post,
    path = "/auth/validate",
    responses(
        (status = 200, description = "Token is valid", body = ValidateResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ValidateResponse>, AppError> {
    let token = bearer_token(&headers)?;
    let result = verify_token(token, &state.jwt_config);
    track_jwt_validation(result.is_ok());

    Ok(Json(ValidateResponse {
        valid: true,
        payload: result?,
    }))
}

/// Exchange a still-valid token for a fresh one
#[utoipa::path(
    post,
    path = "/auth/refresh",
    responses(
        (status = 200, description = "New access token", body = RefreshResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(sub = %principal.0.sub))]
pub async fn refresh_token(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, AppError> {
    let token = bearer_token(&headers)?;
    let access_token = jobify_auth::refresh_token(token, &state.jwt_config)?;
    track_jwt_issued(principal.principal_type().as_str());

    Ok(Json(RefreshResponse { access_token }))
}
