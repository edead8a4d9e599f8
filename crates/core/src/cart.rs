//! Cart totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::CartItem;
use crate::pricing::{PriceDisplay, effective_price, format_price};

/// A cart item joined with the pricing columns of its product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: CartItem,
    pub product_name: String,
    pub image_url: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub on_sale: bool,
}

/// One priced cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    #[serde(flatten)]
    pub item: CartItem,
    pub product_name: String,
    pub image_url: String,
    pub pricing: PriceDisplay,
    pub line_total: Decimal,
    pub line_total_display: String,
}

/// A user's cart with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLineView>,
    pub item_count: i64,
    pub subtotal: Decimal,
    pub subtotal_display: String,
    /// How much the active discounts take off the list prices.
    pub savings: Decimal,
}

impl CartSummary {
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut item_count = 0_i64;
        let mut subtotal = Decimal::ZERO;
        let mut savings = Decimal::ZERO;

        let lines: Vec<CartLineView> = lines
            .into_iter()
            .map(|line| {
                let quantity = Decimal::from(line.item.quantity);
                let unit = effective_price(line.price, line.sale_price, line.on_sale);
                let line_total = unit * quantity;

                item_count += i64::from(line.item.quantity);
                subtotal += line_total;
                savings += (line.price - unit) * quantity;

                CartLineView {
                    pricing: PriceDisplay::new(line.price, line.sale_price, line.on_sale),
                    line_total,
                    line_total_display: format_price(line_total),
                    product_name: line.product_name,
                    image_url: line.image_url,
                    item: line.item,
                }
            })
            .collect();

        Self {
            lines,
            item_count,
            subtotal,
            subtotal_display: format_price(subtotal),
            savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{CartItemId, ProductId, UserId};

    fn line(quantity: i32, price: i64, sale: Option<i64>, on_sale: bool) -> CartLine {
        CartLine {
            item: CartItem {
                id: CartItemId::generate(),
                user_id: UserId::generate(),
                product_id: ProductId::generate(),
                quantity,
                size: Some("M".to_string()),
                color: None,
                created_at: Utc::now(),
            },
            product_name: "Tee".to_string(),
            image_url: String::new(),
            price: Decimal::from(price),
            sale_price: sale.map(Decimal::from),
            on_sale,
        }
    }

    #[test]
    fn test_empty_cart() {
        let summary = CartSummary::from_lines(Vec::new());
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.subtotal_display, "$0.00");
    }

    #[test]
    fn test_totals_use_sale_price_only_when_flagged() {
        let summary = CartSummary::from_lines(vec![
            line(2, 100, Some(75), true),
            line(1, 40, Some(30), false),
        ]);

        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, Decimal::from(190));
        assert_eq!(summary.savings, Decimal::from(50));
        assert_eq!(summary.lines[0].line_total, Decimal::from(150));
        assert_eq!(summary.lines[1].line_total, Decimal::from(40));
    }
}
