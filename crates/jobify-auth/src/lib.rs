//! # Jobify Auth
//!
//! Principal types, token claims, and JWT utilities for the Jobify API.
//!
//! Three kinds of principal can authenticate: users (job seekers), companies
//! (employers), and admins. All three share one token scheme; the token says
//! which kind it belongs to, and admin tokens also carry the admin's role.
//!
//! - [`principal`]: [`PrincipalType`] and [`AdminRole`]
//! - [`claims`]: the signed claim set ([`Claims`]) and its identity part ([`TokenPayload`])
//! - [`jwt`]: issuing, verifying, and refreshing tokens
//!
//! # Example
//!
//! ```ignore
//! use jobify_auth::{AdminRole, PrincipalType, TokenPayload, issue_token, verify_token};
//! use jobify_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let payload = TokenPayload::new(admin_id, "a@x.com", PrincipalType::Admin, Some(AdminRole::Superadmin));
//!
//! let token = issue_token(&payload, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.payload(), payload);
//! ```

pub mod claims;
pub mod jwt;
pub mod principal;

pub use claims::{Claims, TokenPayload};
pub use jwt::{issue_token, refresh_token, verify_token};
pub use principal::{AdminRole, PrincipalType};
