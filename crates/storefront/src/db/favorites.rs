//! Favorite (user, product) pair operations.
//!
//! Adding and removing are both idempotent: re-adding an existing pair or
//! removing a missing one succeeds without touching any row.

use sqlx::PgPool;

use threadline_core::catalog::{Favorite, Product};
use threadline_core::{ProductId, UserId};

use super::RepositoryError;

/// Repository for favorites.
pub struct FavoriteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the products a user has favorited, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn products_for_user(&self, user_id: UserId) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT
                p.id, p.name, p.description, p.category, p.subcategory,
                p.price, p.sale_price, p.on_sale, p.weight, p.purchase_cost,
                p.sizes, p.colors, p.stock, p.featured, p.vip, p.is_new,
                p.image_url, p.collaboration_id, p.created_at
            FROM shop.favorite f
            JOIN shop.product p ON p.id = f.product_id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC, p.id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Favorite a product. Returns `None` if the pair already existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the user or product does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Option<Favorite>, RepositoryError> {
        sqlx::query_as::<_, Favorite>(
            r"
            INSERT INTO shop.favorite (user_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, product_id) DO NOTHING
            RETURNING user_id, product_id, created_at
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "user or product"))
    }

    /// Remove a favorite. Returns whether a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove(&self, user_id: UserId, product_id: ProductId) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM shop.favorite WHERE user_id = $1 AND product_id = $2")
                .bind(user_id)
                .bind(product_id)
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
