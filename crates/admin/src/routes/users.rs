//! Profile administration.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use threadline_core::catalog::UserProfile;
use threadline_core::{UserId, UserRole};

use super::LimitQuery;
use crate::db::{UserRepository, clamp_limit};
use crate::error::Result;
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: UserRole,
}

/// List profiles.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<UserProfile>>> {
    let profiles = UserRepository::new(state.pool())
        .list(clamp_limit(query.limit))
        .await?;
    Ok(Json(profiles))
}

/// Assign a role.
#[instrument(skip(state))]
pub async fn set_role(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(body): Json<SetRoleRequest>,
) -> Result<Json<UserProfile>> {
    let profile = UserRepository::new(state.pool())
        .set_role(id, body.role)
        .await?;

    tracing::info!(user_id = %profile.id, role = %profile.role, "Role updated");
    Ok(Json(profile))
}
