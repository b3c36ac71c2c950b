use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use jobify_auth::PrincipalType;
use jobify_core::{AppError, PaginationParams};
use jobify_models::{
    ChangePasswordDto, Company, CreateCompanyDto, ErrorResponse, MessageResponse,
    PaginatedCompaniesResponse, UpdateCompanyDto,
};

use super::service::CompanyService;
use crate::middleware::auth::AuthPrincipal;
use crate::modules::auth::AuthService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

/// Register a company
#[utoipa::path(
    post,
    path = "/companies",
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company registered", body = Company),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Companies"
)]
#[instrument(skip_all)]
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCompanyDto>,
) -> Result<(StatusCode, Json<Company>), AppError> {
    let company = CompanyService::create_company(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// List companies
#[utoipa::path(
    get,
    path = "/companies",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of companies", body = PaginatedCompaniesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
#[instrument(skip(state))]
pub async fn get_companies(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedCompaniesResponse>, AppError> {
    let companies = CompanyService::get_companies(&state.db, pagination).await?;
    Ok(Json(companies))
}

/// Current company's profile
#[utoipa::path(
    get,
    path = "/companies/me",
    responses(
        (status = 200, description = "Profile", body = Company),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not a company token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
#[instrument(skip_all)]
pub async fn get_profile(
    State(state): State<AppState>,
    principal: AuthPrincipal,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::get_company(&state.db, principal.id()?).await?;
    Ok(Json(company))
}

/// Update the current company's profile
#[utoipa::path(
    patch,
    path = "/companies/me",
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Updated profile", body = Company),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
#[instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    ValidatedJson(dto): ValidatedJson<UpdateCompanyDto>,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::update_company(&state.db, principal.id()?, dto).await?;
    Ok(Json(company))
}

/// Change the current company's password
#[utoipa::path(
    post,
    path = "/companies/me/password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
#[instrument(skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::change_password(&state.db, PrincipalType::Company, principal.id()?, dto).await?;
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// Get a company by ID
#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company", body = Company),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
#[instrument(skip(state))]
pub async fn get_company(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::get_company(&state.db, id).await?;
    Ok(Json(company))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company deleted", body = MessageResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Company not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Companies"
)]
#[instrument(skip(state))]
pub async fn delete_company(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    CompanyService::delete_company(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Company deleted successfully")))
}
