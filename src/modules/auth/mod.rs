//! Login, token validation and refresh for every principal type.
//!
//! The three login endpoints share one flow, [`service::AuthService::login`],
//! parameterized by [`jobify_auth::PrincipalType`].

pub mod controller;
pub mod router;
pub mod service;

pub use router::init_auth_router;
pub use service::AuthService;
