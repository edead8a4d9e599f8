//! Catalog rows shared by the storefront and admin binaries.
//!
//! These are flat mirrors of the database tables. With the `postgres` feature
//! they derive `sqlx::FromRow`, so both binaries decode rows straight into
//! them. Nothing here enforces invariants beyond what the columns do.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CartItemId, CollaborationId, Email, ProductId, UserId, UserRole};

/// A product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    /// List price.
    pub price: Decimal,
    /// Discounted price, shown only while `on_sale` is set.
    pub sale_price: Option<Decimal>,
    pub on_sale: bool,
    /// Shipping weight in pounds.
    pub weight: Option<Decimal>,
    /// What the store paid per unit, before shipping.
    pub purchase_cost: Option<Decimal>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: i32,
    pub featured: bool,
    pub vip: bool,
    pub is_new: bool,
    pub image_url: String,
    pub collaboration_id: Option<CollaborationId>,
    pub created_at: DateTime<Utc>,
}

/// Product fields supplied by the admin when creating products.
///
/// Used both for single creation and as the template for bulk creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub purchase_cost: Option<Decimal>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub vip: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub collaboration_id: Option<CollaborationId>,
}

impl ProductTemplate {
    /// Produce an insertable row with the given identifier.
    ///
    /// An unset image becomes the empty string.
    #[must_use]
    pub fn instantiate(&self, id: ProductId) -> NewProduct {
        NewProduct {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            price: self.price,
            sale_price: self.sale_price,
            on_sale: self.on_sale,
            weight: self.weight,
            purchase_cost: self.purchase_cost,
            sizes: self.sizes.clone(),
            colors: self.colors.clone(),
            stock: self.stock,
            featured: self.featured,
            vip: self.vip,
            is_new: self.is_new,
            image_url: self.image_url.clone().unwrap_or_default(),
            collaboration_id: self.collaboration_id,
        }
    }
}

/// A product ready for insertion: identifier assigned, image resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub on_sale: bool,
    pub weight: Option<Decimal>,
    pub purchase_cost: Option<Decimal>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: i32,
    pub featured: bool,
    pub vip: bool,
    pub is_new: bool,
    pub image_url: String,
    pub collaboration_id: Option<CollaborationId>,
}

/// Partial product update. `None` leaves the column unchanged.
///
/// An explicit JSON `null` also reads as `None`, so nullable columns such as
/// `sale_price` and `collaboration_id` cannot be cleared through an update
/// once set; the product has to be recreated instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub on_sale: Option<bool>,
    pub weight: Option<Decimal>,
    pub purchase_cost: Option<Decimal>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub stock: Option<i32>,
    pub featured: Option<bool>,
    pub vip: Option<bool>,
    pub is_new: Option<bool>,
    pub image_url: Option<String>,
    pub collaboration_id: Option<CollaborationId>,
}

/// A line in a user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A (user, product) favorite pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Favorite {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

/// A named marketing campaign grouping products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Collaboration {
    pub id: CollaborationId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Mirror of an external identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub role: UserRole,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The singleton pricing configuration used for admin cost calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Configuration {
    /// Shipping cost charged per pound of product weight.
    pub price_per_pound: Decimal,
    /// Multiplier converting purchase currency into selling currency.
    pub exchange_rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> ProductTemplate {
        ProductTemplate {
            name: "Linen Shirt".to_string(),
            description: Some("Relaxed fit".to_string()),
            category: "tops".to_string(),
            subcategory: Some("shirts".to_string()),
            price: Decimal::new(8900, 2),
            sale_price: None,
            on_sale: false,
            weight: Some(Decimal::new(5, 1)),
            purchase_cost: Some(Decimal::new(2500, 2)),
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["sand".to_string()],
            stock: 4,
            featured: false,
            vip: false,
            is_new: true,
            image_url: None,
            collaboration_id: None,
        }
    }

    #[test]
    fn test_instantiate_defaults_image() {
        let id = ProductId::generate();
        let row = template().instantiate(id);
        assert_eq!(row.id, id);
        assert_eq!(row.image_url, "");
        assert_eq!(row.name, "Linen Shirt");
    }

    #[test]
    fn test_instantiate_keeps_image() {
        let mut t = template();
        t.image_url = Some("https://cdn.example/shirt.jpg".to_string());
        let row = t.instantiate(ProductId::generate());
        assert_eq!(row.image_url, "https://cdn.example/shirt.jpg");
    }

    #[test]
    fn test_template_deserialize_defaults() {
        let json = r#"{"name":"Cap","category":"accessories","price":"19.50"}"#;
        let t: ProductTemplate = serde_json::from_str(json).expect("valid template");
        assert_eq!(t.price, Decimal::new(1950, 2));
        assert!(t.sizes.is_empty());
        assert!(!t.on_sale);
        assert_eq!(t.image_url, None);
    }

    #[test]
    fn test_update_null_same_as_absent() {
        let update: ProductUpdate =
            serde_json::from_str(r#"{"sale_price":null,"collaboration_id":null}"#)
                .expect("valid update");
        assert_eq!(update, ProductUpdate::default());
    }
}
