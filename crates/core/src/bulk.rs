//! Bulk product creation planning.
//!
//! Expands one template into N insertable rows. The caller inserts the
//! result in a single statement so the batch lands all-or-nothing.

use thiserror::Error;

use crate::catalog::{NewProduct, ProductTemplate};
use crate::types::ProductId;

/// Reasons a bulk request is rejected before touching the database.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BulkError {
    #[error("a product template is required")]
    MissingTemplate,
    #[error("quantity must be a positive integer (got {0})")]
    NonPositiveQuantity(i64),
    #[error("quantity {requested} exceeds the maximum of {max}")]
    TooMany { requested: i64, max: u32 },
}

/// Clone `template` into `quantity` rows, each with a fresh identifier.
///
/// # Errors
///
/// Returns [`BulkError::NonPositiveQuantity`] when `quantity <= 0`.
pub fn plan_bulk_units(template: &ProductTemplate, quantity: i64) -> Result<Vec<NewProduct>, BulkError> {
    if quantity <= 0 {
        return Err(BulkError::NonPositiveQuantity(quantity));
    }

    Ok((0..quantity)
        .map(|_| template.instantiate(ProductId::generate()))
        .collect())
}

/// Validate a raw request (template may be absent) against a ceiling, then plan it.
///
/// # Errors
///
/// Returns [`BulkError`] for a missing template, a non-positive quantity, or
/// a quantity above `max`.
pub fn plan_bulk_request(
    template: Option<&ProductTemplate>,
    quantity: i64,
    max: u32,
) -> Result<Vec<NewProduct>, BulkError> {
    let template = template.ok_or(BulkError::MissingTemplate)?;
    if quantity > i64::from(max) {
        return Err(BulkError::TooMany {
            requested: quantity,
            max,
        });
    }
    plan_bulk_units(template, quantity)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal::Decimal;

    use super::*;

    fn template() -> ProductTemplate {
        ProductTemplate {
            name: "Wool Coat".to_string(),
            description: None,
            category: "outerwear".to_string(),
            subcategory: None,
            price: Decimal::from(240),
            sale_price: Some(Decimal::from(180)),
            on_sale: true,
            weight: Some(Decimal::from(3)),
            purchase_cost: None,
            sizes: vec!["M".to_string(), "L".to_string()],
            colors: vec!["charcoal".to_string()],
            stock: 1,
            featured: true,
            vip: false,
            is_new: false,
            image_url: None,
            collaboration_id: None,
        }
    }

    #[test]
    fn test_plans_exactly_n_unique_units() {
        let t = template();
        let units = plan_bulk_units(&t, 7).unwrap();
        assert_eq!(units.len(), 7);

        let ids: HashSet<_> = units.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 7);

        for unit in &units {
            let expected = t.instantiate(unit.id);
            assert_eq!(unit, &expected);
            assert_eq!(unit.image_url, "");
        }
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        assert_eq!(
            plan_bulk_units(&template(), 0),
            Err(BulkError::NonPositiveQuantity(0))
        );
        assert_eq!(
            plan_bulk_units(&template(), -3),
            Err(BulkError::NonPositiveQuantity(-3))
        );
    }

    #[test]
    fn test_request_requires_template() {
        assert_eq!(
            plan_bulk_request(None, 2, 10),
            Err(BulkError::MissingTemplate)
        );
    }

    #[test]
    fn test_request_enforces_ceiling() {
        let t = template();
        assert!(matches!(
            plan_bulk_request(Some(&t), 11, 10),
            Err(BulkError::TooMany { requested: 11, max: 10 })
        ));
        assert_eq!(plan_bulk_request(Some(&t), 10, 10).unwrap().len(), 10);
    }
}
