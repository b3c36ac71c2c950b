pub mod admins;
pub mod auth;
pub mod companies;
pub mod users;
