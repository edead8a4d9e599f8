//! The singleton pricing configuration row.

use sqlx::PgPool;

use threadline_core::catalog::Configuration;
use threadline_core::cost::RateSettings;

use super::RepositoryError;

/// Repository for `shop.configuration`.
pub struct ConfigurationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ConfigurationRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read the configuration, if it has ever been written.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self) -> Result<Option<Configuration>, RepositoryError> {
        let config = sqlx::query_as::<_, Configuration>(
            r"
            SELECT price_per_pound, exchange_rate, updated_at
            FROM shop.configuration
            WHERE id = 1
            ",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(config)
    }

    /// Create or replace the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, rates: &RateSettings) -> Result<Configuration, RepositoryError> {
        let config = sqlx::query_as::<_, Configuration>(
            r"
            INSERT INTO shop.configuration (id, price_per_pound, exchange_rate)
            VALUES (1, $1, $2)
            ON CONFLICT (id) DO UPDATE
            SET price_per_pound = $1, exchange_rate = $2, updated_at = NOW()
            RETURNING price_per_pound, exchange_rate, updated_at
            ",
        )
        .bind(rates.price_per_pound)
        .bind(rates.exchange_rate)
        .fetch_one(self.pool)
        .await?;

        Ok(config)
    }
}
