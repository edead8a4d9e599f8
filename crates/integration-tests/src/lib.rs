//! Integration tests for Threadline.
//!
//! # Running Tests
//!
//! ```bash
//! # Migrate a scratch database and start both servers
//! cargo run -p threadline-cli -- migrate
//! cargo run -p threadline-storefront &
//! cargo run -p threadline-admin &
//!
//! # Run the ignored tests against them
//! cargo test -p threadline-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `STOREFRONT_URL` - default `http://localhost:3000`
//! - `ADMIN_URL` - default `http://localhost:3001`
//! - `ADMIN_API_TOKEN` - the token the admin server was started with
//! - `DATABASE_URL` - same database the servers use (for seeding profiles)

use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

use threadline_core::catalog::ProductTemplate;

/// Shared handles for one test.
pub struct TestContext {
    pub client: Client,
    pub storefront_url: String,
    pub admin_url: String,
    pub admin_token: String,
    pub pool: PgPool,
}

impl TestContext {
    /// Build a context from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_API_TOKEN` or `DATABASE_URL` is unset or the
    /// database is unreachable.
    #[allow(clippy::expect_used)]
    pub async fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        Self {
            client: Client::new(),
            storefront_url: env_or("STOREFRONT_URL", "http://localhost:3000"),
            admin_url: env_or("ADMIN_URL", "http://localhost:3001"),
            admin_token: std::env::var("ADMIN_API_TOKEN").expect("ADMIN_API_TOKEN must be set"),
            pool: PgPool::connect(&database_url)
                .await
                .expect("Failed to connect to test database"),
        }
    }

    /// Absolute storefront URL for `path`.
    #[must_use]
    pub fn storefront(&self, path: &str) -> String {
        format!("{}{path}", self.storefront_url)
    }

    /// Absolute admin URL for `path`.
    #[must_use]
    pub fn admin(&self, path: &str) -> String {
        format!("{}{path}", self.admin_url)
    }

    /// Insert a profile directly; no API creates them.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    #[allow(clippy::expect_used)]
    pub async fn seed_user(&self, role: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO shop.user_profile (id, email, role) VALUES ($1, $2, $3::shop.user_role)",
        )
        .bind(id)
        .bind(format!("it-{id}@example.test"))
        .bind(role)
        .execute(&self.pool)
        .await
        .expect("Failed to seed user profile");
        id
    }

    /// Create a product through the admin API and return its JSON.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or is not answered with 201.
    #[allow(clippy::expect_used)]
    pub async fn create_product(&self, template: &ProductTemplate) -> Value {
        let resp = self
            .client
            .post(self.admin("/api/products"))
            .bearer_auth(&self.admin_token)
            .json(template)
            .send()
            .await
            .expect("Failed to create product");
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
        resp.json().await.expect("Invalid product JSON")
    }
}

/// A minimal template with a recognisable, unique name.
#[must_use]
pub fn template(name: &str, price: i64) -> ProductTemplate {
    ProductTemplate {
        name: name.to_string(),
        description: None,
        category: "integration".to_string(),
        subcategory: None,
        price: Decimal::from(price),
        sale_price: None,
        on_sale: false,
        weight: None,
        purchase_cost: None,
        sizes: Vec::new(),
        colors: Vec::new(),
        stock: 1,
        featured: false,
        vip: false,
        is_new: false,
        image_url: None,
        collaboration_id: None,
    }
}

/// A unique token to embed in names so tests don't see each other's rows.
#[must_use]
pub fn unique_marker() -> String {
    format!("it{}", Uuid::new_v4().simple())
}

/// Parse a money field serialized as a decimal string.
///
/// # Panics
///
/// Panics if the value is not a decimal string.
#[must_use]
#[allow(clippy::expect_used)]
pub fn decimal(value: &Value) -> Decimal {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("expected a decimal string")
}

/// JSON body of an error response.
#[must_use]
pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
