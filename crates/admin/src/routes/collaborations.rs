//! Collaboration administration.

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use threadline_core::CollaborationId;
use threadline_core::catalog::Collaboration;

use crate::db::CollaborationRepository;
use crate::db::collaborations::NewCollaboration;
use crate::error::{AppError, Result};
use crate::extract::{Json, Path};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCollaborationRequest {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl CreateCollaborationRequest {
    fn into_new(self) -> Result<NewCollaboration> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("name cannot be empty".to_string()));
        }
        Ok(NewCollaboration {
            name: name.to_string(),
            description: self.description,
            image_url: self.image_url,
        })
    }
}

/// Create a collaboration.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCollaborationRequest>,
) -> Result<(StatusCode, Json<Collaboration>)> {
    let input = body.into_new()?;
    let collaboration = CollaborationRepository::new(state.pool())
        .create(&input)
        .await?;

    tracing::info!(collaboration_id = %collaboration.id, "Collaboration created");
    Ok((StatusCode::CREATED, Json(collaboration)))
}

/// Delete a collaboration.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<CollaborationId>,
) -> Result<StatusCode> {
    CollaborationRepository::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let body = CreateCollaborationRequest {
            name: "  ".to_string(),
            description: None,
            image_url: None,
        };
        assert!(matches!(body.into_new(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_name_trimmed() {
        let body = CreateCollaborationRequest {
            name: " Studio Drop ".to_string(),
            description: Some("Spring capsule".to_string()),
            image_url: None,
        };
        assert_eq!(body.into_new().unwrap().name, "Studio Drop");
    }
}
