use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use jobify_auth::PrincipalType;
use jobify_core::{AppError, PaginationParams};
use jobify_models::{
    Admin, ChangePasswordDto, CreateAdminDto, ErrorResponse, MessageResponse,
    PaginatedAdminsResponse, SystemStats, UpdateAdminDto,
};

use super::service::AdminService;
use crate::middleware::auth::AuthPrincipal;
use crate::modules::auth::AuthService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

/// Create an administrator
#[utoipa::path(
    post,
    path = "/admins",
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created", body = Admin),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Superadmin only", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admins"
)]
#[instrument(skip_all)]
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAdminDto>,
) -> Result<(StatusCode, Json<Admin>), AppError> {
    let admin = AdminService::create_admin(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// List administrators
#[utoipa::path(
    get,
    path = "/admins",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of admins", body = PaginatedAdminsResponse),
        (status = 403, description = "Superadmin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admins"
)]
#[instrument(skip(state))]
pub async fn get_admins(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedAdminsResponse>, AppError> {
    let admins = AdminService::get_admins(&state.db, pagination).await?;
    Ok(Json(admins))
}

/// System-wide account statistics
#[utoipa::path(
    get,
    path = "/admins/system-stats",
    responses(
        (status = 200, description = "Statistics", body = SystemStats),
        (status = 403, description = "Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admins"
)]
#[instrument(skip(state))]
pub async fn get_system_stats(
    State(state): State<AppState>,
) -> Result<Json<SystemStats>, AppError> {
    let stats = AdminService::get_system_stats(&state.db).await?;
    Ok(Json(stats))
}

/// Change the current admin's password
#[utoipa::path(
    post,
    path = "/admins/me/password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admins"
)]
#[instrument(skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::change_password(&state.db, PrincipalType::Admin, principal.id()?, dto).await?;
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// Get an administrator by ID
#[utoipa::path(
    get,
    path = "/admins/{id}",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin", body = Admin),
        (status = 403, description = "Superadmin only", body = ErrorResponse),
        (status = 404, description = "Admin not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admins"
)]
#[instrument(skip(state))]
pub async fn get_admin(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Admin>, AppError> {
    let admin = AdminService::get_admin(&state.db, id).await?;
    Ok(Json(admin))
}

/// Update an administrator
#[utoipa::path(
    patch,
    path = "/admins/{id}",
    params(("id" = Uuid, Path, description = "Admin ID")),
    request_body = UpdateAdminDto,
    responses(
        (status = 200, description = "Admin updated", body = Admin),
        (status = 403, description = "Superadmin only", body = ErrorResponse),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admins"
)]
#[instrument(skip(state, dto))]
pub async fn update_admin(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateAdminDto>,
) -> Result<Json<Admin>, AppError> {
    let admin = AdminService::update_admin(&state.db, id, dto).await?;
    Ok(Json(admin))
}

/// Delete an administrator
#[utoipa::path(
    delete,
    path = "/admins/{id}",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin deleted", body = MessageResponse),
        (status = 403, description = "Superadmin only", body = ErrorResponse),
        (status = 404, description = "Admin not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admins"
)]
#[instrument(skip(state))]
pub async fn delete_admin(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AdminService::delete_admin(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Admin deleted successfully")))
}
