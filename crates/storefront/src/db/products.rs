//! Product queries for browsing, search, and VIP content.

use rust_decimal::Decimal;
use sqlx::PgPool;

use threadline_core::catalog::Product;
use threadline_core::{CollaborationId, ProductId};

use super::RepositoryError;

/// Optional filters for product listing. `None` means "don't filter".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub featured: Option<bool>,
    pub vip: Option<bool>,
    pub is_new: Option<bool>,
    pub on_sale: Option<bool>,
    pub collaboration_id: Option<CollaborationId>,
    pub limit: i64,
}

/// Repository for product reads.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT
                id, name, description, category, subcategory,
                price, sale_price, on_sale, weight, purchase_cost,
                sizes, colors, stock, featured, vip, is_new,
                image_url, collaboration_id, created_at
            FROM shop.product
            WHERE
                ($1::text IS NULL OR category = $1)
                AND ($2::text IS NULL OR subcategory = $2)
                AND ($3::numeric IS NULL OR price >= $3)
                AND ($4::numeric IS NULL OR price <= $4)
                AND ($5::bool IS NULL OR featured = $5)
                AND ($6::bool IS NULL OR vip = $6)
                AND ($7::bool IS NULL OR is_new = $7)
                AND ($8::bool IS NULL OR on_sale = $8)
                AND ($9::uuid IS NULL OR collaboration_id = $9)
            ORDER BY created_at DESC, id
            LIMIT $10
            ",
        )
        .bind(filter.category.as_deref())
        .bind(filter.subcategory.as_deref())
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.featured)
        .bind(filter.vip)
        .bind(filter.is_new)
        .bind(filter.on_sale)
        .bind(filter.collaboration_id)
        .bind(filter.limit)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT
                id, name, description, category, subcategory,
                price, sale_price, on_sale, weight, purchase_cost,
                sizes, colors, stock, featured, vip, is_new,
                image_url, collaboration_id, created_at
            FROM shop.product
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// `LIKE` wildcards in `query` are matched literally.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(&self, query: &str, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let pattern = format!("%{}%", escape_like(query));

        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT
                id, name, description, category, subcategory,
                price, sale_price, on_sale, weight, purchase_cost,
                sizes, colors, stock, featured, vip, is_new,
                image_url, collaboration_id, created_at
            FROM shop.product
            WHERE name ILIKE $1 OR description ILIKE $1
            ORDER BY name, id
            LIMIT $2
            ",
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }
}

/// Escape `LIKE` metacharacters so user input only matches literally.
#[must_use]
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("linen"), "linen");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
