//! Command implementations.

pub mod config;
pub mod migrate;
pub mod products;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

use threadline_admin::db::{self, RepositoryError};
use threadline_core::bulk::BulkError;
use threadline_core::cost::PricingError;

/// Errors shared by every command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Could not read template: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid template JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bulk(#[from] BulkError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Connect using `ADMIN_DATABASE_URL`, or `DATABASE_URL` when unset.
pub(crate) async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&SecretString::from(url)).await?)
}
