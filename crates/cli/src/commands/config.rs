//! Pricing configuration commands.

use rust_decimal::Decimal;

use threadline_admin::db::ConfigurationRepository;
use threadline_core::cost::RateSettings;

use super::{CommandError, connect};

/// Log the current configuration.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable.
pub async fn show() -> Result<(), CommandError> {
    let pool = connect().await?;

    match ConfigurationRepository::new(&pool).get().await? {
        Some(config) => tracing::info!(
            price_per_pound = %config.price_per_pound,
            exchange_rate = %config.exchange_rate,
            updated_at = %config.updated_at,
            "Current configuration"
        ),
        None => tracing::warn!("Configuration has not been set"),
    }
    Ok(())
}

/// Validate and upsert the configuration.
///
/// # Errors
///
/// Returns `CommandError::Pricing` for negative values (nothing is written),
/// or a database error.
pub async fn set(price_per_pound: Decimal, exchange_rate: Decimal) -> Result<(), CommandError> {
    let rates = RateSettings {
        price_per_pound,
        exchange_rate,
    };
    rates.validate()?;

    let pool = connect().await?;
    let config = ConfigurationRepository::new(&pool).upsert(&rates).await?;

    tracing::info!(
        price_per_pound = %config.price_per_pound,
        exchange_rate = %config.exchange_rate,
        "Configuration saved"
    );
    Ok(())
}
