use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    change_password, create_company, delete_company, get_companies, get_company, get_profile,
    update_profile,
};

pub fn init_companies_router() -> Router<AppState> {
    Router::new()
        .route("/companies", post(create_company).get(get_companies))
        .route("/companies/me", get(get_profile).patch(update_profile))
        .route("/companies/me/password", post(change_password))
        .route("/companies/{id}", get(get_company).delete(delete_company))
}
