use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    change_password, create_admin, delete_admin, get_admin, get_admins, get_system_stats,
    update_admin,
};

pub fn init_admins_router() -> Router<AppState> {
    Router::new()
        .route("/admins", post(create_admin).get(get_admins))
        .route("/admins/system-stats", get(get_system_stats))
        .route("/admins/me/password", post(change_password))
        .route(
            "/admins/{id}",
            get(get_admin).patch(update_admin).delete(delete_admin),
        )
}
