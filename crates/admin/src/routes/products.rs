//! Product administration: single and bulk creation, edits, cost estimates.

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use threadline_core::ProductId;
use threadline_core::bulk::plan_bulk_request;
use threadline_core::catalog::{Product, ProductTemplate, ProductUpdate};
use threadline_core::cost::CostEstimate;

use super::LimitQuery;
use crate::db::{ConfigurationRepository, ProductRepository, clamp_limit};
use crate::error::{AppError, Result};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

/// Body of `POST /api/products/bulk`.
///
/// The template is optional at the wire level so that a missing or `null`
/// template is reported as a validation error instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct BulkCreateRequest {
    #[serde(default)]
    pub template: Option<ProductTemplate>,
    pub quantity: i64,
}

/// List products, including purchase cost.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list(clamp_limit(query.limit))
        .await?;
    Ok(Json(products))
}

/// Create one product.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(template): Json<ProductTemplate>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = ProductRepository::new(state.pool())
        .create(template.instantiate(ProductId::generate()))
        .await?;

    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Create `quantity` copies of a template in one statement.
#[instrument(skip(state))]
pub async fn bulk_create(
    State(state): State<AppState>,
    Json(body): Json<BulkCreateRequest>,
) -> Result<(StatusCode, Json<Vec<Product>>)> {
    let units = plan_bulk_request(
        body.template.as_ref(),
        body.quantity,
        state.config().bulk_max_quantity,
    )?;

    let created = ProductRepository::new(state.pool())
        .insert_batch(units)
        .await?;

    tracing::info!(count = created.len(), "Bulk products created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a product.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(changes): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .update(id, &changes)
        .await?;
    Ok(Json(product))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    ProductRepository::new(state.pool()).delete(id).await?;
    tracing::info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Landed cost and margin for one product under the current configuration.
#[instrument(skip(state))]
pub async fn cost(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<CostEstimate>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    let config = ConfigurationRepository::new(state.pool())
        .get()
        .await?
        .ok_or_else(|| AppError::NotFound("configuration has not been set".to_string()))?;

    Ok(Json(CostEstimate::compute(&product, &config)))
}
