//! Threadline storefront library.
//!
//! The public JSON API: catalog browsing, search, carts, favorites, and
//! profiles. Exposed as a library so the router can be exercised in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
