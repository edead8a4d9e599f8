//! Cart item database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use threadline_core::cart::CartLine;
use threadline_core::catalog::CartItem;
use threadline_core::{CartItemId, ProductId, UserId};

use super::RepositoryError;

/// Internal row type for the cart listing (cart item + product pricing).
#[derive(Debug, sqlx::FromRow)]
struct CartLineRow {
    id: CartItemId,
    user_id: UserId,
    product_id: ProductId,
    quantity: i32,
    size: Option<String>,
    color: Option<String>,
    created_at: DateTime<Utc>,
    product_name: String,
    image_url: String,
    price: Decimal,
    sale_price: Option<Decimal>,
    on_sale: bool,
}

impl From<CartLineRow> for CartLine {
    fn from(row: CartLineRow) -> Self {
        Self {
            item: CartItem {
                id: row.id,
                user_id: row.user_id,
                product_id: row.product_id,
                quantity: row.quantity,
                size: row.size,
                color: row.color,
                created_at: row.created_at,
            },
            product_name: row.product_name,
            image_url: row.image_url,
            price: row.price,
            sale_price: row.sale_price,
            on_sale: row.on_sale,
        }
    }
}

/// Fields for a new cart line.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Partial cart line update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct CartItemUpdate {
    pub quantity: Option<i32>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Repository for cart operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user's cart lines with product pricing, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lines_for_user(&self, user_id: UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartLineRow>(
            r"
            SELECT
                c.id, c.user_id, c.product_id, c.quantity, c.size, c.color, c.created_at,
                p.name AS product_name, p.image_url, p.price, p.sale_price, p.on_sale
            FROM shop.cart_item c
            JOIN shop.product p ON p.id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.created_at, c.id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Add a line to a cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the user or product does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(&self, item: &NewCartItem) -> Result<CartItem, RepositoryError> {
        sqlx::query_as::<_, CartItem>(
            r"
            INSERT INTO shop.cart_item (id, user_id, product_id, quantity, size, color)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, product_id, quantity, size, color, created_at
            ",
        )
        .bind(CartItemId::generate())
        .bind(item.user_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(item.size.as_deref())
        .bind(item.color.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "user or product"))
    }

    /// Update a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: CartItemId,
        update: &CartItemUpdate,
    ) -> Result<CartItem, RepositoryError> {
        sqlx::query_as::<_, CartItem>(
            r"
            UPDATE shop.cart_item
            SET
                quantity = COALESCE($2, quantity),
                size = COALESCE($3, size),
                color = COALESCE($4, color)
            WHERE id = $1
            RETURNING id, user_id, product_id, quantity, size, color, created_at
            ",
        )
        .bind(id)
        .bind(update.quantity)
        .bind(update.size.as_deref())
        .bind(update.color.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the line doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn remove(&self, id: CartItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.cart_item WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Remove every line in a user's cart, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.cart_item WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
