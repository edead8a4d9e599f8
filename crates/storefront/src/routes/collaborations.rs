//! Collaboration handlers.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use threadline_core::CollaborationId;
use threadline_core::catalog::Collaboration;

use super::products::{ProductView, views};
use crate::db::{CollaborationRepository, ProductFilter, ProductRepository, clamp_limit};
use crate::error::{AppError, Result};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

/// A bare `limit` parameter.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

/// List collaborations.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Collaboration>>> {
    let rows = CollaborationRepository::new(state.pool())
        .list(clamp_limit(query.limit))
        .await?;
    Ok(Json(rows))
}

/// Show a single collaboration.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CollaborationId>,
) -> Result<Json<Collaboration>> {
    let collaboration = CollaborationRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("collaboration {id}")))?;
    Ok(Json(collaboration))
}

/// Products belonging to a collaboration.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path(id): Path<CollaborationId>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let filter = ProductFilter {
        collaboration_id: Some(id),
        limit: clamp_limit(query.limit),
        ..ProductFilter::default()
    };
    let products = ProductRepository::new(state.pool()).list(&filter).await?;
    Ok(Json(views(products)))
}
