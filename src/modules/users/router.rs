use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    change_password, create_user, delete_user, get_profile, get_user, get_users, update_profile,
};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(get_users))
        .route("/users/me", get(get_profile).patch(update_profile))
        .route("/users/me/password", post(change_password))
        .route("/users/{id}", get(get_user).delete(delete_user))
}
