//! Administrator management and system statistics.
//!
//! Every route here requires an admin token; most require `superadmin`.
//! The first superadmin is created with `jobify-cli create-admin`.

pub mod controller;
pub mod router;
pub mod service;

pub use router::init_admins_router;
pub use service::AdminService;
