//! Landed-cost estimates for the admin panel.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Configuration, Product};
use crate::pricing::effective_price;

/// Rejected configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: Decimal },
}

/// Writable part of the singleton [`Configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSettings {
    pub price_per_pound: Decimal,
    pub exchange_rate: Decimal,
}

impl RateSettings {
    /// Both rates must be zero or positive.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Negative`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        for (field, value) in [
            ("price_per_pound", self.price_per_pound),
            ("exchange_rate", self.exchange_rate),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(PricingError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Cost breakdown for one unit of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    /// `weight * price_per_pound`.
    pub shipping_cost: Decimal,
    /// Purchase cost plus shipping, in purchase currency.
    pub landed_cost: Decimal,
    /// `landed_cost * exchange_rate`.
    pub landed_cost_local: Decimal,
    /// What the shopper currently pays.
    pub selling_price: Decimal,
    /// `selling_price - landed_cost_local`.
    pub margin: Decimal,
}

impl CostEstimate {
    /// Compute the estimate. Missing weight or purchase cost count as zero.
    #[must_use]
    pub fn compute(product: &Product, config: &Configuration) -> Self {
        let shipping_cost = product.weight.unwrap_or_default() * config.price_per_pound;
        let landed_cost = product.purchase_cost.unwrap_or_default() + shipping_cost;
        let landed_cost_local = landed_cost * config.exchange_rate;
        let selling_price = effective_price(product.price, product.sale_price, product.on_sale);

        Self {
            shipping_cost: cents(shipping_cost),
            landed_cost: cents(landed_cost),
            landed_cost_local: cents(landed_cost_local),
            selling_price: cents(selling_price),
            margin: cents(selling_price - landed_cost_local),
        }
    }
}

fn cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::ProductId;

    fn d(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    fn product(weight: Option<&str>, purchase_cost: Option<&str>) -> Product {
        Product {
            id: ProductId::generate(),
            name: "Denim Jacket".to_string(),
            description: None,
            category: "outerwear".to_string(),
            subcategory: None,
            price: d("120"),
            sale_price: Some(d("90")),
            on_sale: true,
            weight: weight.map(d),
            purchase_cost: purchase_cost.map(d),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: 3,
            featured: false,
            vip: false,
            is_new: false,
            image_url: String::new(),
            collaboration_id: None,
            created_at: Utc::now(),
        }
    }

    fn config() -> Configuration {
        Configuration {
            price_per_pound: d("4.5"),
            exchange_rate: d("1.2"),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_breakdown() {
        let estimate = CostEstimate::compute(&product(Some("2"), Some("30")), &config());
        assert_eq!(estimate.shipping_cost, d("9.00"));
        assert_eq!(estimate.landed_cost, d("39.00"));
        assert_eq!(estimate.landed_cost_local, d("46.80"));
        assert_eq!(estimate.selling_price, d("90"));
        assert_eq!(estimate.margin, d("43.20"));
    }

    #[test]
    fn test_rate_settings_validation() {
        let ok = RateSettings {
            price_per_pound: d("0"),
            exchange_rate: d("1.35"),
        };
        assert_eq!(ok.validate(), Ok(()));

        let bad = RateSettings {
            price_per_pound: d("2"),
            exchange_rate: d("-1"),
        };
        assert!(matches!(
            bad.validate(),
            Err(PricingError::Negative { field: "exchange_rate", .. })
        ));
    }

    #[test]
    fn test_missing_inputs_count_as_zero() {
        let estimate = CostEstimate::compute(&product(None, None), &config());
        assert_eq!(estimate.shipping_cost, Decimal::ZERO);
        assert_eq!(estimate.landed_cost_local, Decimal::ZERO);
        assert_eq!(estimate.margin, d("90"));
    }
}
