//! VIP-only catalog view.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use threadline_core::UserId;

use super::products::{ProductView, views};
use crate::db::{ProductFilter, ProductRepository, UserRepository, clamp_limit};
use crate::error::{AppError, Result};
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VipQuery {
    pub user_id: UserId,
    pub limit: Option<i64>,
}

/// VIP products, visible only to VIP and admin profiles.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<VipQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let profile = UserRepository::new(state.pool())
        .get(query.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", query.user_id)))?;

    if !profile.role.has_vip_access() {
        tracing::info!(user_id = %profile.id, role = %profile.role, "VIP access denied");
        return Err(AppError::Forbidden("VIP access required".to_string()));
    }

    let filter = ProductFilter {
        vip: Some(true),
        limit: clamp_limit(query.limit),
        ..ProductFilter::default()
    };
    let products = ProductRepository::new(state.pool()).list(&filter).await?;
    Ok(Json(views(products)))
}
