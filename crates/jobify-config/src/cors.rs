//! Browser origins allowed to call the API.
//!
//! `ALLOWED_ORIGINS` is a comma-separated list; blank entries are ignored.
//! When unset, the local frontend dev servers are allowed.

use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());
        Self::from_list(&raw)
    }

    pub fn from_list(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self { allowed_origins }
    }
}
