//! User profile reads and self-service updates.

use sqlx::PgPool;

use threadline_core::UserId;
use threadline_core::catalog::UserProfile;

use super::RepositoryError;

/// Repository for user profiles.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a profile by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r"
            SELECT id, email, role, name, created_at
            FROM shop.user_profile
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(profile)
    }

    /// Change a profile's display name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the profile doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_name(&self, id: UserId, name: &str) -> Result<UserProfile, RepositoryError> {
        sqlx::query_as::<_, UserProfile>(
            r"
            UPDATE shop.user_profile
            SET name = $2
            WHERE id = $1
            RETURNING id, email, role, name, created_at
            ",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }
}
