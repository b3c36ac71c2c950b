use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use jobify_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::middleware::guard::route_guard;
use crate::modules::admins::init_admins_router;
use crate::modules::auth::init_auth_router;
use crate::modules::companies::init_companies_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

/// API routes behind the route guard.
///
/// Module routers are merged rather than nested so the guard sees full route
/// templates such as `/admins/{id}`.
fn api_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(init_auth_router())
        .merge(init_users_router())
        .merge(init_companies_router())
        .merge(init_admins_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), route_guard))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(api_router(&state))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
