//! Collaboration creation and removal.

use sqlx::PgPool;

use threadline_core::CollaborationId;
use threadline_core::catalog::Collaboration;

use super::RepositoryError;

/// Fields for a new collaboration.
#[derive(Debug, Clone)]
pub struct NewCollaboration {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Repository for collaborations.
pub struct CollaborationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CollaborationRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a collaboration with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &NewCollaboration) -> Result<Collaboration, RepositoryError> {
        let collaboration = sqlx::query_as::<_, Collaboration>(
            r"
            INSERT INTO shop.collaboration (id, name, description, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, image_url, created_at
            ",
        )
        .bind(CollaborationId::generate())
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.image_url.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(collaboration)
    }

    /// Delete a collaboration. Its products keep existing, unlinked.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the collaboration doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: CollaborationId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shop.collaboration WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
