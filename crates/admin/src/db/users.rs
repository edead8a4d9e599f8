//! Profile listing and role assignment.

use sqlx::PgPool;

use threadline_core::catalog::UserProfile;
use threadline_core::{UserId, UserRole};

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

    /// List profiles, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, limit: i64) -> Result<Vec<UserProfile>, RepositoryError> {
        let profiles = sqlx::query_as::<_, UserProfile>(
            r"
            SELECT id, email, role, name, created_at
            FROM shop.user_profile
            ORDER BY created_at DESC, id
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(profiles)
    }

    /// Set a profile's role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the profile doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_role(&self, id: UserId, role: UserRole) -> Result<UserProfile, RepositoryError> {
        sqlx::query_as::<_, UserProfile>(
            r"
            UPDATE shop.user_profile
            SET role = $2
            WHERE id = $1
            RETURNING id, email, role, name, created_at
            ",
        )
        .bind(id)
        .bind(role)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }
}
