//! # Jobify Core
//!
//! Core types, errors, and utilities for the Jobify API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page-based pagination for list endpoints
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use jobify_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secret123")?;
//! assert!(verify_password("secret123", &hash));
//!
//! let error = AppError::not_found(anyhow::anyhow!("Admin not found"));
//! ```

pub mod errors;
pub mod pagination;
pub mod password;

pub use errors::AppError;
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{
    BCRYPT_COST, hash_password, hash_password_blocking, unknown_account_hash, verify_password,
    verify_password_blocking,
};
