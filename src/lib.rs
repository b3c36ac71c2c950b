//! # Jobify API
//!
//! Authentication core of the Jobify job board, built with Axum and PostgreSQL.
//!
//! Three kinds of principal authenticate against their own credential table:
//!
//! | Principal | Table       | Login endpoint          |
//! |-----------|-------------|-------------------------|
//! | user      | `users`     | `POST /auth/login/user`    |
//! | company   | `companies` | `POST /auth/login/company` |
//! | admin     | `admins`    | `POST /auth/login/admin`   |
//!
//! All three receive the same kind of HS256 access token. Admin tokens also
//! carry a role, `superadmin` or `moderator`.
//!
//! ## Route permissions
//!
//! Permissions are declared in one table,
//! [`middleware::guard::ROUTE_POLICIES`], and enforced by one middleware
//! before any handler runs. A missing or bad token is a 401; a valid token
//! with the wrong role or principal type is a 403.
//!
//! ## Layout
//!
//! ```text
//! src/
//! ├── middleware/   # AuthPrincipal extractor, route guard
//! ├── modules/
//! │   ├── auth/       # login, validate, refresh
//! │   ├── users/      # job seekers
//! │   ├── companies/  # employers
//! │   └── admins/     # administrators, system stats
//! ├── docs.rs       # OpenAPI
//! ├── router.rs
//! ├── state.rs
//! └── validator.rs  # ValidatedJson extractor
//! ```
//!
//! ## Bootstrapping
//!
//! Admin routes are never public. Create the first superadmin with:
//!
//! ```bash
//! cargo run --bin jobify-cli -- create-admin --role superadmin
//! ```
//!
//! API docs are served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use jobify_auth;
pub use jobify_config;
pub use jobify_core;
pub use jobify_db;
pub use jobify_models;
