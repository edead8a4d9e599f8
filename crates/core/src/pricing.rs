//! Price formatting and discount display rules.
//!
//! A discount applies only when the sale flag is set, a sale price exists,
//! and that sale price is strictly below a positive list price. The badge
//! percentage is `(price - sale) / price * 100` rounded to the nearest
//! integer, halves rounding up.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::catalog::Product;

/// Discount percentage to display, or `None` when no discount applies.
///
/// ```
/// use rust_decimal::Decimal;
/// use threadline_core::pricing::discount_percent;
///
/// let price = Decimal::from(100);
/// let sale = Some(Decimal::from(75));
/// assert_eq!(discount_percent(price, sale, true), Some(25));
/// assert_eq!(discount_percent(price, sale, false), None);
/// ```
#[must_use]
pub fn discount_percent(price: Decimal, sale_price: Option<Decimal>, on_sale: bool) -> Option<u32> {
    let sale = sale_price.filter(|_| on_sale)?;
    if price <= Decimal::ZERO || sale >= price {
        return None;
    }

    ((price - sale) / price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

/// The price a shopper pays: the sale price when a discount applies.
#[must_use]
pub fn effective_price(price: Decimal, sale_price: Option<Decimal>, on_sale: bool) -> Decimal {
    match (discount_percent(price, sale_price, on_sale), sale_price) {
        (Some(_), Some(sale)) => sale,
        _ => price,
    }
}

/// Format an amount as dollars with thousands separators, e.g. `$1,234.50`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{cents}")
}

/// Display fields for a product's price, attached to every product response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    /// What the shopper pays.
    pub current: Decimal,
    /// `current`, formatted.
    pub current_display: String,
    /// The struck-through list price, only while discounted.
    pub compare_at_display: Option<String>,
    pub discount_percent: Option<u32>,
    /// e.g. `-25%`.
    pub badge: Option<String>,
}

impl PriceDisplay {
    #[must_use]
    pub fn new(price: Decimal, sale_price: Option<Decimal>, on_sale: bool) -> Self {
        let percent = discount_percent(price, sale_price, on_sale);
        let current = effective_price(price, sale_price, on_sale);

        Self {
            current,
            current_display: format_price(current),
            compare_at_display: percent.map(|_| format_price(price)),
            discount_percent: percent,
            badge: percent.map(|p| format!("-{p}%")),
        }
    }

    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self::new(product.price, product.sale_price, product.on_sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    #[test]
    fn test_quarter_off_shows_badge() {
        let display = PriceDisplay::new(d("100"), Some(d("75")), true);
        assert_eq!(display.badge.as_deref(), Some("-25%"));
        assert_eq!(display.current, d("75"));
        assert_eq!(display.current_display, "$75.00");
        assert_eq!(display.compare_at_display.as_deref(), Some("$100.00"));
    }

    #[test]
    fn test_flag_off_hides_badge() {
        let display = PriceDisplay::new(d("100"), Some(d("75")), false);
        assert_eq!(display.badge, None);
        assert_eq!(display.compare_at_display, None);
        assert_eq!(display.current, d("100"));
    }

    #[test]
    fn test_no_discount_when_sale_not_lower() {
        assert_eq!(discount_percent(d("50"), Some(d("50")), true), None);
        assert_eq!(discount_percent(d("50"), Some(d("60")), true), None);
        assert_eq!(discount_percent(d("50"), None, true), None);
    }

    #[test]
    fn test_no_discount_on_zero_price() {
        assert_eq!(discount_percent(Decimal::ZERO, Some(d("-1")), true), None);
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        // 33.33..% -> 33
        assert_eq!(discount_percent(d("30"), Some(d("20")), true), Some(33));
        // 66.66..% -> 67
        assert_eq!(discount_percent(d("30"), Some(d("10")), true), Some(67));
        // 12.5% -> 13
        assert_eq!(discount_percent(d("80"), Some(d("70")), true), Some(13));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(d("0")), "$0.00");
        assert_eq!(format_price(d("7.5")), "$7.50");
        assert_eq!(format_price(d("999.999")), "$1,000.00");
        assert_eq!(format_price(d("1234567.891")), "$1,234,567.89");
        assert_eq!(format_price(d("-42.1")), "-$42.10");
    }
}
