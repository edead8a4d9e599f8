//! Database operations for the storefront.
//!
//! # Schema: `shop`
//!
//! - `product` - Catalog rows (read-only here; the admin binary writes them)
//! - `collaboration` - Campaigns grouping products
//! - `cart_item` - Per-user cart lines
//! - `favorite` - (user, product) pairs
//! - `user_profile` - Mirrors of external identity records
//!
//! Every repository method issues exactly one statement against one table
//! (the cart listing joins `product` for prices).
//!
//! # Migrations
//!
//! Migrations are stored in the workspace `migrations/` directory and run via:
//! ```bash
//! cargo run -p threadline-cli -- migrate
//! ```

pub mod cart;
pub mod collaborations;
pub mod favorites;
pub mod products;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use cart::CartRepository;
pub use collaborations::CollaborationRepository;
pub use favorites::FavoriteRepository;
pub use products::{ProductFilter, ProductRepository};
pub use users::UserRepository;

/// Default number of rows returned by list queries.
pub const DEFAULT_LIMIT: i64 = 50;
/// Upper bound on the `limit` a client may request.
pub const MAX_LIMIT: i64 = 200;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// A write referenced a row that does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),
}

impl RepositoryError {
    /// Classify a write error, turning foreign-key violations into
    /// [`RepositoryError::InvalidReference`].
    pub(crate) fn from_write(err: sqlx::Error, what: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_foreign_key_violation()
        {
            return Self::InvalidReference(format!("{what} does not exist"));
        }
        Self::Database(err)
    }
}

/// Clamp a client-supplied limit into `1..=MAX_LIMIT`.
#[must_use]
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-10)), 1);
        assert_eq!(clamp_limit(Some(20)), 20);
        assert_eq!(clamp_limit(Some(10_000)), MAX_LIMIT);
    }
}
