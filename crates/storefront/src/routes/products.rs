//! Product browsing handlers.

use axum::extract::State;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use threadline_core::catalog::Product;
use threadline_core::pricing::PriceDisplay;
use threadline_core::{CollaborationId, ProductId};

use crate::db::{ProductFilter, ProductRepository, clamp_limit};
use crate::error::{AppError, Result};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

/// Product as shown to shoppers: catalog fields plus display pricing.
///
/// Purchase cost stays internal to the admin API.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub on_sale: bool,
    pub weight: Option<Decimal>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: i32,
    pub in_stock: bool,
    pub featured: bool,
    pub vip: bool,
    pub is_new: bool,
    pub image_url: String,
    pub collaboration_id: Option<CollaborationId>,
    pub created_at: DateTime<Utc>,
    pub pricing: PriceDisplay,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let pricing = PriceDisplay::for_product(&product);
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            category: product.category,
            subcategory: product.subcategory,
            price: product.price,
            sale_price: product.sale_price,
            on_sale: product.on_sale,
            weight: product.weight,
            sizes: product.sizes,
            colors: product.colors,
            in_stock: product.stock > 0,
            stock: product.stock,
            featured: product.featured,
            vip: product.vip,
            is_new: product.is_new,
            image_url: product.image_url,
            collaboration_id: product.collaboration_id,
            created_at: product.created_at,
            pricing,
        }
    }
}

/// Convert rows into views.
pub fn views(products: Vec<Product>) -> Vec<ProductView> {
    products.into_iter().map(ProductView::from).collect()
}

/// Query parameters for product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub featured: Option<bool>,
    pub vip: Option<bool>,
    pub is_new: Option<bool>,
    pub on_sale: Option<bool>,
    pub collaboration_id: Option<CollaborationId>,
    pub limit: Option<i64>,
}

impl ProductQuery {
    /// Validate and convert into a repository filter.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the price range is inverted.
    pub fn into_filter(self) -> Result<ProductFilter> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(AppError::BadRequest(
                "min_price cannot exceed max_price".to_string(),
            ));
        }

        Ok(ProductFilter {
            category: non_blank(self.category),
            subcategory: non_blank(self.subcategory),
            min_price: self.min_price,
            max_price: self.max_price,
            featured: self.featured,
            vip: self.vip,
            is_new: self.is_new,
            on_sale: self.on_sale,
            collaboration_id: self.collaboration_id,
            limit: clamp_limit(self.limit),
        })
    }
}

/// Treat `?category=` the same as an absent parameter.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// List products.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let filter = query.into_filter()?;
    let products = ProductRepository::new(state.pool()).list(&filter).await?;
    Ok(Json(views(products)))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(product.into()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_price_range_rejected() {
        let query = ProductQuery {
            min_price: Some(Decimal::from(50)),
            max_price: Some(Decimal::from(10)),
            ..ProductQuery::default()
        };
        assert!(matches!(query.into_filter(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_blank_filters_ignored_and_limit_clamped() {
        let query = ProductQuery {
            category: Some("  ".to_string()),
            subcategory: Some(" dresses ".to_string()),
            limit: Some(5000),
            ..ProductQuery::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.category, None);
        assert_eq!(filter.subcategory.as_deref(), Some("dresses"));
        assert_eq!(filter.limit, crate::db::MAX_LIMIT);
    }

    #[test]
    fn test_view_hides_purchase_cost_and_adds_pricing() {
        let product = Product {
            id: ProductId::generate(),
            name: "Silk Scarf".to_string(),
            description: None,
            category: "accessories".to_string(),
            subcategory: None,
            price: Decimal::from(100),
            sale_price: Some(Decimal::from(75)),
            on_sale: true,
            weight: None,
            purchase_cost: Some(Decimal::from(20)),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: 0,
            featured: false,
            vip: false,
            is_new: false,
            image_url: String::new(),
            collaboration_id: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(ProductView::from(product)).unwrap();
        assert!(json.get("purchase_cost").is_none());
        assert_eq!(json["pricing"]["badge"], "-25%");
        assert_eq!(json["in_stock"], false);
    }
}
