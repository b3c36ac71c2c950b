//! # Jobify DB
//!
//! PostgreSQL pool initialization and constraint helpers.
//!
//! Each principal type (user, company, admin) has its own table with a unique
//! email column. Concurrent registrations with the same email race on that
//! constraint; the loser gets SQLSTATE `23505`, which callers detect with
//! [`is_unique_violation`] and report as a conflict.
//!
//! # Example
//!
//! ```ignore
//! use jobify_db::init_db_pool;
//!
//! let pool = init_db_pool(&std::env::var("DATABASE_URL")?).await?;
//! ```

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;

const UNIQUE_VIOLATION: &str = "23505";

/// Connects a pool. Call once at startup; the pool is cheap to clone.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Whether the error is a unique-constraint violation (duplicate email).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}
