use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_admin, login_company, login_user, refresh_token, validate_token};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/login/user", post(login_user))
        .route("/auth/login/company", post(login_company))
        .route("/auth/login/admin", post(login_admin))
        .route("/auth/validate", post(validate_token))
        .route("/auth/refresh", post(refresh_token))
}
