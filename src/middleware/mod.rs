//! Authentication and authorization.
//!
//! Every API route goes through [`guard::route_guard`], which looks the route
//! up in [`guard::ROUTE_POLICIES`] and rejects the request before any handler
//! runs if the bearer token or role does not satisfy the declared policy.
//! Handlers read the verified identity with the [`auth::AuthPrincipal`]
//! extractor.

pub mod auth;
pub mod guard;
