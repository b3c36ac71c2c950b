//! # Jobify Models
//!
//! Records and DTOs for the Jobify API.
//!
//! Every principal type has a record struct that mirrors its table minus the
//! password hash, so a record can be returned to a client as-is. The hash is
//! only ever read through [`auth::CredentialRecord`].
//!
//! - [`auth`]: login, token validation and refresh, credential lookups
//! - [`users`]: job seekers
//! - [`companies`]: employers
//! - [`admins`]: administrators and system statistics

pub mod admins;
pub mod auth;
pub mod companies;
pub mod users;

pub use admins::{
    Admin, CreateAdminDto, PaginatedAdminsResponse, PrincipalCounts, SystemStats, UpdateAdminDto,
};
pub use auth::{
    ChangePasswordDto, CredentialRecord, ErrorResponse, LoginRequest, LoginResponse,
    MessageResponse, PrincipalProfile, RefreshResponse, ValidateResponse,
};
pub use companies::{Company, CreateCompanyDto, PaginatedCompaniesResponse, UpdateCompanyDto};
pub use users::{CreateUserDto, PaginatedUsersResponse, UpdateUserDto, User};
