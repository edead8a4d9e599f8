//! Threadline CLI - migrations and catalog maintenance.
//!
//! # Usage
//!
//! ```bash
//! # Apply every migration in `migrations/`
//! tl-cli migrate
//!
//! # Set the pricing configuration
//! tl-cli config set --price-per-pound 4.50 --exchange-rate 1.35
//!
//! # Create 25 products from a JSON template
//! tl-cli products bulk-create --template coat.json --quantity 25
//! ```
//!
//! All commands read `ADMIN_DATABASE_URL` (falling back to `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use threadline_admin::config::BULK_MAX_QUANTITY_CEILING;

mod commands;

#[derive(Parser)]
#[command(name = "tl-cli")]
#[command(author, version, about = "Threadline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Read or change the pricing configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Catalog maintenance
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Create or replace the configuration
    Set {
        /// Shipping cost per pound of product weight
        #[arg(long)]
        price_per_pound: Decimal,

        /// Purchase-to-selling currency multiplier
        #[arg(long)]
        exchange_rate: Decimal,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// Insert N copies of a JSON product template in one statement
    BulkCreate {
        /// Path to a JSON file holding the product template
        #[arg(short, long)]
        template: PathBuf,

        /// Number of products to create
        #[arg(short, long)]
        quantity: i64,

        /// Refuse quantities above this
        #[arg(
            long,
            default_value_t = 500,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(BULK_MAX_QUANTITY_CEILING))
        )]
        max: u32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show().await?,
            ConfigAction::Set {
                price_per_pound,
                exchange_rate,
            } => commands::config::set(price_per_pound, exchange_rate).await?,
        },
        Commands::Products { action } => match action {
            ProductsAction::BulkCreate {
                template,
                quantity,
                max,
            } => {
                commands::products::bulk_create(&template, quantity, max).await?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_config_set() {
        let cli = Cli::try_parse_from([
            "tl-cli",
            "config",
            "set",
            "--price-per-pound",
            "4.50",
            "--exchange-rate",
            "1.35",
        ]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Config {
                action: ConfigAction::Set { .. }
            })
        ));
    }

    #[test]
    fn test_rejects_non_numeric_quantity() {
        let cli = Cli::try_parse_from([
            "tl-cli",
            "products",
            "bulk-create",
            "--template",
            "t.json",
            "--quantity",
            "many",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_max_capped_at_insert_ceiling() {
        let args = |max: String| {
            Cli::try_parse_from([
                "tl-cli".to_string(),
                "products".to_string(),
                "bulk-create".to_string(),
                "--template".to_string(),
                "t.json".to_string(),
                "--quantity".to_string(),
                "5".to_string(),
                "--max".to_string(),
                max,
            ])
        };

        assert!(args(BULK_MAX_QUANTITY_CEILING.to_string()).is_ok());
        assert!(args((BULK_MAX_QUANTITY_CEILING + 1).to_string()).is_err());
        assert!(args("0".to_string()).is_err());
    }
}
