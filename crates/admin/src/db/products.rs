//! Product writes: single and bulk creation, partial updates, deletion.

use sqlx::{PgPool, Postgres, QueryBuilder};

use threadline_core::ProductId;
use threadline_core::catalog::{NewProduct, Product, ProductUpdate};

use super::RepositoryError;

const PRODUCT_COLUMNS: &str = "id, name, description, category, subcategory, \
     price, sale_price, on_sale, weight, purchase_cost, \
     sizes, colors, stock, featured, vip, is_new, \
     image_url, collaboration_id, created_at";

/// Repository for product administration.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM shop.product ORDER BY created_at DESC, id LIMIT $1"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
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
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM shop.product WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(product)
    }

    /// Insert one product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if the collaboration does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut created = self.insert_batch(vec![product]).await?;
        created.pop().ok_or(RepositoryError::NotFound)
    }

    /// Insert every product in a single multi-row `INSERT`.
    ///
    /// One statement means the batch is all-or-nothing. An empty batch
    /// returns immediately without a query.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidReference` if a collaboration does not exist.
    /// Returns `RepositoryError::Database` for other database errors; nothing is inserted.
    pub async fn insert_batch(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, RepositoryError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO shop.product (\
             id, name, description, category, subcategory, \
             price, sale_price, on_sale, weight, purchase_cost, \
             sizes, colors, stock, featured, vip, is_new, \
             image_url, collaboration_id) ",
        );
        builder.push_values(products, |mut row, p| {
            row.push_bind(p.id)
                .push_bind(p.name)
                .push_bind(p.description)
                .push_bind(p.category)
                .push_bind(p.subcategory)
                .push_bind(p.price)
                .push_bind(p.sale_price)
                .push_bind(p.on_sale)
                .push_bind(p.weight)
                .push_bind(p.purchase_cost)
                .push_bind(p.sizes)
                .push_bind(p.colors)
                .push_bind(p.stock)
                .push_bind(p.featured)
                .push_bind(p.vip)
                .push_bind(p.is_new)
                .push_bind(p.image_url)
                .push_bind(p.collaboration_id);
        });
        builder.push(" RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        builder
            .build_query_as::<Product>()
            .fetch_all(self.pool)
            .await
            .map_err(|e| RepositoryError::from_write(e, "collaboration"))
    }

    /// Apply a partial update. `None` fields keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::InvalidReference` if the collaboration does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: ProductId, input: &ProductUpdate) -> Result<Product, RepositoryError> {
        let sql = format!(
            r"
            UPDATE shop.product
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                subcategory = COALESCE($5, subcategory),
                price = COALESCE($6, price),
                sale_price = COALESCE($7, sale_price),
                on_sale = COALESCE($8, on_sale),
                weight = COALESCE($9, weight),
                purchase_cost = COALESCE($10, purchase_cost),
                sizes = COALESCE($11, sizes),
                colors = COALESCE($12, colors),
                stock = COALESCE($13, stock),
                featured = COALESCE($14, featured),
                vip = COALESCE($15, vip),
                is_new = COALESCE($16, is_new),
                image_url = COALESCE($17, image_url),
                collaboration_id = COALESCE($18, collaboration_id)
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.category.as_deref())
            .bind(input.subcategory.as_deref())
            .bind(input.price)
            .bind(input.sale_price)
            .bind(input.on_sale)
            .bind(input.weight)
            .bind(input.purchase_cost)
            .bind(input.sizes.as_deref())
            .bind(input.colors.as_deref())
            .bind(input.stock)
            .bind(input.featured)
            .bind(input.vip)
            .bind(input.is_new)
            .bind(input.image_url.as_deref())
            .bind(input.collaboration_id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| RepositoryError::from_write(e, "collaboration"))?
            .ok_or(RepositoryError::NotFound)
    }

    /// Delete a product. Cart lines and favorites cascade.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.product WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
