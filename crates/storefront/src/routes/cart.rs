//! Cart handlers.
//!
//! Carts are keyed by the shopper's profile ID; identity itself is
//! established upstream.

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use threadline_core::cart::CartSummary;
use threadline_core::catalog::CartItem;
use threadline_core::{CartItemId, ProductId, UserId};

use crate::db::CartRepository;
use crate::db::cart::{CartItemUpdate, NewCartItem};
use crate::error::{AppError, Result};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

/// Largest quantity accepted for a single cart line.
const MAX_LINE_QUANTITY: i32 = 99;

/// Identifies whose cart to act on.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: UserId,
}

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

const fn default_quantity() -> i32 {
    1
}

/// Update-cart-line request body.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCartRequest {
    pub quantity: Option<i32>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Response for clearing a cart.
#[derive(Debug, Serialize)]
pub struct ClearCartResponse {
    pub removed: u64,
}

fn validate_quantity(quantity: i32) -> Result<()> {
    if (1..=MAX_LINE_QUANTITY).contains(&quantity) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "quantity must be between 1 and {MAX_LINE_QUANTITY}"
        )))
    }
}

/// Show a user's cart with totals.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<CartSummary>> {
    let lines = CartRepository::new(state.pool())
        .lines_for_user(query.user_id)
        .await?;
    Ok(Json(CartSummary::from_lines(lines)))
}

/// Add an item to a cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<(StatusCode, Json<CartItem>)> {
    validate_quantity(body.quantity)?;

    let item = CartRepository::new(state.pool())
        .add(&NewCartItem {
            user_id: body.user_id,
            product_id: body.product_id,
            quantity: body.quantity,
            size: body.size,
            color: body.color,
        })
        .await?;

    tracing::info!(cart_item_id = %item.id, user_id = %item.user_id, "Added to cart");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update quantity, size, or color of a cart line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<CartItem>> {
    if let Some(quantity) = body.quantity {
        validate_quantity(quantity)?;
    }

    let item = CartRepository::new(state.pool())
        .update(
            id,
            &CartItemUpdate {
                quantity: body.quantity,
                size: body.size,
                color: body.color,
            },
        )
        .await?;
    Ok(Json(item))
}

/// Remove a single cart line.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
) -> Result<StatusCode> {
    CartRepository::new(state.pool()).remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Empty a user's cart.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ClearCartResponse>> {
    let removed = CartRepository::new(state.pool()).clear(query.user_id).await?;
    Ok(Json(ClearCartResponse { removed }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-2).is_err());
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }
}
