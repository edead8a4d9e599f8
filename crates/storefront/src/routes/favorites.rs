//! Favorite handlers.

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use threadline_core::{ProductId, UserId};

use super::cart::UserQuery;
use super::products::{ProductView, views};
use crate::db::FavoriteRepository;
use crate::error::Result;
use crate::extract::{Json, Query};
use crate::state::AppState;

/// Body and query shape identifying one (user, product) pair.
#[derive(Debug, Deserialize)]
pub struct FavoriteKey {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    pub added: bool,
}

#[derive(Debug, Serialize)]
pub struct RemoveFavoriteResponse {
    pub removed: bool,
}

/// A user's favorited products.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let products = FavoriteRepository::new(state.pool())
        .products_for_user(query.user_id)
        .await?;
    Ok(Json(views(products)))
}

/// Favorite a product. Re-adding an existing pair answers 200 instead of 201.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(key): Json<FavoriteKey>,
) -> Result<(StatusCode, Json<AddFavoriteResponse>)> {
    let inserted = FavoriteRepository::new(state.pool())
        .add(key.user_id, key.product_id)
        .await?;

    let status = if inserted.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(AddFavoriteResponse {
            added: inserted.is_some(),
        }),
    ))
}

/// Unfavorite a product. Removing a missing pair is not an error.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Query(key): Query<FavoriteKey>,
) -> Result<Json<RemoveFavoriteResponse>> {
    let removed = FavoriteRepository::new(state.pool())
        .remove(key.user_id, key.product_id)
        .await?;
    Ok(Json(RemoveFavoriteResponse { removed }))
}
