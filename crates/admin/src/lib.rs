//! Threadline admin library.
//!
//! Catalog maintenance, bulk product creation, role assignment, and the
//! pricing configuration used for cost estimates. Exposed as a library so
//! the CLI can reuse the repositories and tests can drive the router.
//!
//! # Security
//!
//! Every `/api` route requires the `ADMIN_API_TOKEN` bearer token. Bind to a
//! private interface or enable TLS before exposing it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
