//! Declarative route permissions.
//!
//! Each API route declares its policy once, in [`ROUTE_POLICIES`], keyed by
//! method and route template. [`route_guard`] is the single place the table
//! is enforced. Routes missing from the table require a valid token.

use axum::{
    extract::{MatchedPath, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use jobify_auth::{AdminRole, Claims, PrincipalType, verify_token};
use jobify_core::AppError;
use jobify_observability::{track_authorization_check, track_jwt_validation};

use crate::middleware::auth::{AuthPrincipal, bearer_token};
use crate::state::AppState;

/// Who may call a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// No token required.
    Public,
    /// Any valid token.
    Authenticated,
    /// A valid token of this principal type.
    Principal(PrincipalType),
    /// A valid admin token whose role is in the set.
    Roles(&'static [AdminRole]),
}

const STAFF: &[AdminRole] = &[AdminRole::Superadmin, AdminRole::Moderator];
const SUPERADMIN: &[AdminRole] = &[AdminRole::Superadmin];

pub static ROUTE_POLICIES: &[(Method, &str, RoutePolicy)] = &[
    // Auth
    (Method::POST, "/auth/login/user", RoutePolicy::Public),
    (Method::POST, "/auth/login/company", RoutePolicy::Public),
    (Method::POST, "/auth/login/admin", RoutePolicy::Public),
    (Method::POST, "/auth/validate", RoutePolicy::Public),
    (Method::POST, "/auth/refresh", RoutePolicy::Authenticated),
    // Users
    (Method::POST, "/users", RoutePolicy::Public),
    (Method::GET, "/users", RoutePolicy::Roles(STAFF)),
    (Method::GET, "/users/me", RoutePolicy::Principal(PrincipalType::User)),
    (Method::PATCH, "/users/me", RoutePolicy::Principal(PrincipalType::User)),
    (Method::POST, "/users/me/password", RoutePolicy::Principal(PrincipalType::User)),
    (Method::GET, "/users/{id}", RoutePolicy::Roles(STAFF)),
    (Method::DELETE, "/users/{id}", RoutePolicy::Roles(SUPERADMIN)),
    // Companies
    (Method::POST, "/companies", RoutePolicy::Public),
    (Method::GET, "/companies", RoutePolicy::Roles(STAFF)),
    (Method::GET, "/companies/me", RoutePolicy::Principal(PrincipalType::Company)),
    (Method::PATCH, "/companies/me", RoutePolicy::Principal(PrincipalType::Company)),
    (Method::POST, "/companies/me/password", RoutePolicy::Principal(PrincipalType::Company)),
    (Method::GET, "/companies/{id}", RoutePolicy::Roles(STAFF)),
    (Method::DELETE, "/companies/{id}", RoutePolicy::Roles(SUPERADMIN)),
    // Admins
    (Method::POST, "/admins", RoutePolicy::Roles(SUPERADMIN)),
    (Method::GET, "/admins", RoutePolicy::Roles(SUPERADMIN)),
    (Method::GET, "/admins/system-stats", RoutePolicy::Roles(STAFF)),
    (Method::POST, "/admins/me/password", RoutePolicy::Principal(PrincipalType::Admin)),
    (Method::GET, "/admins/{id}", RoutePolicy::Roles(SUPERADMIN)),
    (Method::PATCH, "/admins/{id}", RoutePolicy::Roles(SUPERADMIN)),
    (Method::DELETE, "/admins/{id}", RoutePolicy::Roles(SUPERADMIN)),
];

/// Declared policy for a route, `Authenticated` if undeclared.
pub fn policy_for(method: &Method, path: &str) -> RoutePolicy {
    ROUTE_POLICIES
        .iter()
        .find(|(m, p, _)| m == method && *p == path)
        .map(|(_, _, policy)| *policy)
        .unwrap_or(RoutePolicy::Authenticated)
}

/// Checks verified claims against a non-public policy.
pub fn authorize(policy: RoutePolicy, claims: &Claims) -> Result<(), AppError> {
    match policy {
        RoutePolicy::Public | RoutePolicy::Authenticated => Ok(()),
        RoutePolicy::Principal(expected) if claims.principal_type == expected => Ok(()),
        RoutePolicy::Principal(expected) => Err(AppError::forbidden(format!(
            "Access denied. This route is only available to {} accounts",
            expected
        ))),
        RoutePolicy::Roles(allowed) => match claims.role {
            Some(role) if claims.principal_type == PrincipalType::Admin && allowed.contains(&role) => {
                Ok(())
            }
            _ => Err(AppError::forbidden(
                "Access denied. Insufficient role".to_string(),
            )),
        },
    }
}

/// Enforces [`ROUTE_POLICIES`]. Install with `route_layer` so the matched
/// route template is available.
pub async fn route_guard(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let policy = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| policy_for(req.method(), path.as_str()))
        .unwrap_or(RoutePolicy::Authenticated);

    if policy == RoutePolicy::Public {
        return Ok(next.run(req).await);
    }

    let token = bearer_token(req.headers())?;
    let claims = match verify_token(token, &state.jwt_config) {
        Ok(claims) => {
            track_jwt_validation(true);
            claims
        }
        Err(err) => {
            track_jwt_validation(false);
            return Err(err);
        }
    };

    let role = claims.role.map_or("none", |role| role.as_str());
    if let Err(err) = authorize(policy, &claims) {
        debug!(principal_type = %claims.principal_type, role, ?policy, "Route access denied");
        track_authorization_check(false, role);
        return Err(err);
    }
    track_authorization_check(true, role);

    req.extensions_mut().insert(AuthPrincipal(claims));
    Ok(next.run(req).await)
}
