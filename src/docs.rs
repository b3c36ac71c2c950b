use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use jobify_auth::{AdminRole, Claims, PrincipalType};
use jobify_core::{PaginationMeta, PaginationParams};
use jobify_models::{
    Admin, ChangePasswordDto, Company, CreateAdminDto, CreateCompanyDto, CreateUserDto,
    ErrorResponse, LoginRequest, LoginResponse, MessageResponse, PaginatedAdminsResponse,
    PaginatedCompaniesResponse, PaginatedUsersResponse, PrincipalCounts, PrincipalProfile,
    RefreshResponse, SystemStats, UpdateAdminDto, UpdateCompanyDto, UpdateUserDto, User,
    ValidateResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::login_company,
        crate::modules::auth::controller::login_admin,
        crate::modules::auth::controller::validate_token,
        crate::modules::auth::controller::refresh_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::change_password,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::delete_user,
        crate::modules::companies::controller::create_company,
        crate::modules::companies::controller::get_companies,
        crate::modules::companies::controller::get_profile,
        crate::modules::companies::controller::update_profile,
        crate::modules::companies::controller::change_password,
        crate::modules::companies::controller::get_company,
        crate::modules::companies::controller::delete_company,
        crate::modules::admins::controller::create_admin,
        crate::modules::admins::controller::get_admins,
        crate::modules::admins::controller::get_system_stats,
        crate::modules::admins::controller::change_password,
        crate::modules::admins::controller::get_admin,
        crate::modules::admins::controller::update_admin,
        crate::modules::admins::controller::delete_admin,
    ),
    components(
        schemas(
            PrincipalType,
            AdminRole,
            Claims,
            LoginRequest,
            LoginResponse,
            PrincipalProfile,
            ValidateResponse,
            RefreshResponse,
            ChangePasswordDto,
            MessageResponse,
            ErrorResponse,
            User,
            CreateUserDto,
            UpdateUserDto,
            PaginatedUsersResponse,
            Company,
            CreateCompanyDto,
            UpdateCompanyDto,
            PaginatedCompaniesResponse,
            Admin,
            CreateAdminDto,
            UpdateAdminDto,
            PaginatedAdminsResponse,
            PrincipalCounts,
            SystemStats,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, token validation and refresh"),
        (name = "Users", description = "Job seeker accounts"),
        (name = "Companies", description = "Employer accounts"),
        (name = "Admins", description = "Administrator management and statistics")
    ),
    info(
        title = "Jobify API",
        version = "0.1.0",
        description = "Authentication and account management for the Jobify job board.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for (method, path, _) in crate::middleware::guard::ROUTE_POLICIES {
            assert!(
                doc.paths.paths.contains_key(*path),
                "{} {} missing from OpenAPI",
                method,
                path
            );
        }
    }
}
