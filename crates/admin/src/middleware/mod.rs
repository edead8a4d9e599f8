//! HTTP middleware for admin.

pub mod auth;

pub use auth::{RequireAdminToken, require_admin_token};
