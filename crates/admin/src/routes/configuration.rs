//! Pricing configuration handlers.

use axum::extract::State;
use tracing::instrument;

use threadline_core::catalog::Configuration;
use threadline_core::cost::RateSettings;

use crate::db::ConfigurationRepository;
use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::state::AppState;

/// Read the singleton configuration.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<Configuration>> {
    let config = ConfigurationRepository::new(state.pool())
        .get()
        .await?
        .ok_or_else(|| AppError::NotFound("configuration has not been set".to_string()))?;
    Ok(Json(config))
}

/// Create or replace the configuration.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(rates): Json<RateSettings>,
) -> Result<Json<Configuration>> {
    rates.validate()?;

    let config = ConfigurationRepository::new(state.pool())
        .upsert(&rates)
        .await?;

    tracing::info!(
        price_per_pound = %config.price_per_pound,
        exchange_rate = %config.exchange_rate,
        "Configuration updated"
    );
    Ok(Json(config))
}
