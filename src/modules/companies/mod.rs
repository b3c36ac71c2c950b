//! Employer accounts: self-registration, profile, and staff management.

pub mod controller;
pub mod router;
pub mod service;

pub use router::init_companies_router;
pub use service::CompanyService;
