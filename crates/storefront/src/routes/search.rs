//! Product search.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use super::products::{ProductView, views};
use crate::db::{ProductRepository, clamp_limit};
use crate::error::{AppError, Result};
use crate::extract::{Json, Query};
use crate::state::AppState;

/// Longest accepted search string, in characters.
const MAX_QUERY_CHARS: usize = 100;

/// Search parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

/// Search products by name or description (case-insensitive).
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let term = query.q.trim();
    if term.is_empty() {
        return Err(AppError::BadRequest("q is required".to_string()));
    }
    if term.chars().count() > MAX_QUERY_CHARS {
        return Err(AppError::BadRequest(format!(
            "q must be at most {MAX_QUERY_CHARS} characters"
        )));
    }

    let products = ProductRepository::new(state.pool())
        .search(term, clamp_limit(query.limit))
        .await?;
    tracing::debug!(term, results = products.len(), "search");
    Ok(Json(views(products)))
}
