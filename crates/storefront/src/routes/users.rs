//! Profile handlers.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use threadline_core::UserId;
use threadline_core::catalog::UserProfile;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::extract::{Json, Path};
use crate::state::AppState;

const MAX_NAME_CHARS: usize = 120;

/// Profile fields a user may change themselves.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}

impl UpdateProfileRequest {
    fn validated_name(&self) -> Result<&str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("name cannot be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(AppError::BadRequest(format!(
                "name must be at most {MAX_NAME_CHARS} characters"
            )));
        }
        Ok(name)
    }
}

/// Show a profile.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserProfile>> {
    let profile = UserRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
    Ok(Json(profile))
}

/// Update a profile's display name.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>> {
    let name = body.validated_name()?;
    let profile = UserRepository::new(state.pool())
        .update_name(id, name)
        .await?;
    Ok(Json(profile))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(name: &str) -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_name_trimmed() {
        assert_eq!(request("  Ada  ").validated_name().unwrap(), "Ada");
    }

    #[test]
    fn test_blank_or_long_name_rejected() {
        assert!(request("   ").validated_name().is_err());
        assert!(request(&"x".repeat(MAX_NAME_CHARS + 1)).validated_name().is_err());
    }
}
