//! Collaboration reads.

use sqlx::PgPool;

use threadline_core::CollaborationId;
use threadline_core::catalog::Collaboration;

use super::RepositoryError;

/// Repository for collaboration reads.
pub struct CollaborationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CollaborationRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List collaborations, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<Collaboration>, RepositoryError> {
        let rows = sqlx::query_as::<_, Collaboration>(
            r"
            SELECT id, name, description, image_url, created_at
            FROM shop.collaboration
            ORDER BY created_at DESC, id
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a collaboration by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CollaborationId) -> Result<Option<Collaboration>, RepositoryError> {
        let row = sqlx::query_as::<_, Collaboration>(
            r"
            SELECT id, name, description, image_url, created_at
            FROM shop.collaboration
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
