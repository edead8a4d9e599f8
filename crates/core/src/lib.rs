//! Threadline Core - Shared catalog types and pricing rules.
//!
//! This crate provides the types used across all Threadline components:
//! - `storefront` - Public shopping API
//! - `admin` - Internal catalog and pricing API
//! - `cli` - Command-line tools for migrations and bulk operations
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. The optional `postgres` feature adds `sqlx`
//! encode/decode support so the binaries can read rows directly into these
//! types.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, email, roles
//! - [`catalog`] - Table rows: products, cart items, favorites, collaborations, profiles, configuration
//! - [`pricing`] - Discount rule and price formatting
//! - [`bulk`] - Bulk product creation planning
//! - [`cart`] - Cart totals
//! - [`cost`] - Landed-cost estimates and rate settings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bulk;
pub mod cart;
pub mod catalog;
pub mod cost;
pub mod pricing;
pub mod types;

pub use types::*;
