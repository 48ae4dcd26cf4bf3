use crate::error::{AppError, Result};
use crate::models::PriceBreakdown;

/// Share of the unit sale price assumed to be the purchase cost.
pub const PURCHASE_COST_RATIO: f64 = 0.55;

/// Multipliers applied to the unit purchase cost for the 20%, 40% and 60%
/// profit tiers.
pub const PROFIT_20_FACTOR: f64 = 0.8;
pub const PROFIT_40_FACTOR: f64 = 0.6;
pub const PROFIT_60_FACTOR: f64 = 0.4;

pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn calculate_prices(sale_price: f64, quantity: i64) -> PriceBreakdown {
    let quantity = quantity as f64;

    let total_sale_price = sale_price * quantity;
    let purchase_price = sale_price * PURCHASE_COST_RATIO;
    let total_purchase_price = purchase_price * quantity;

    // Unit profit first, then scaled by quantity
    let total_profit_20 = purchase_price * PROFIT_20_FACTOR * quantity;
    let total_profit_40 = purchase_price * PROFIT_40_FACTOR * quantity;
    let total_profit_60 = purchase_price * PROFIT_60_FACTOR * quantity;

    PriceBreakdown {
        sale_price_total: format_amount(total_sale_price),
        purchase_cost_total: format_amount(total_purchase_price),
        profit_20: format_amount(total_profit_20),
        profit_40: format_amount(total_profit_40),
        profit_60: format_amount(total_profit_60),
    }
}

/// Like `calculate_prices`, but rejects inputs whose totals overflow to
/// infinity. The sale total has the largest magnitude of the five.
pub fn checked_prices(sale_price: f64, quantity: i64) -> Result<PriceBreakdown> {
    if !(sale_price * quantity as f64).is_finite() {
        return Err(AppError::InvalidInput);
    }
    Ok(calculate_prices(sale_price, quantity))
}

pub fn parse_price(input: &str) -> Result<f64> {
    let price: f64 = input.trim().parse().map_err(|_| AppError::InvalidInput)?;
    if !price.is_finite() {
        return Err(AppError::InvalidInput);
    }
    Ok(price)
}

pub fn parse_quantity(input: &str) -> Result<i64> {
    input.trim().parse().map_err(|_| AppError::InvalidInput)
}

/// Parses a stored amount for sorting. Unparsable text yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_breakdown() {
        let prices = calculate_prices(100.0, 2);
        assert_eq!(prices.sale_price_total, "200.00");
        assert_eq!(prices.purchase_cost_total, "110.00");
        assert_eq!(prices.profit_20, "88.00");
        assert_eq!(prices.profit_40, "66.00");
        assert_eq!(prices.profit_60, "44.00");
    }

    #[test]
    fn test_purchase_cost_is_55_percent_of_total() {
        for (price, qty) in [(19.99, 3), (1.0, 1), (250.5, 7), (0.01, 100), (12345.67, 12)] {
            let prices = calculate_prices(price, qty);
            let expected = format!("{:.2}", price * 0.55 * qty as f64);
            assert_eq!(prices.purchase_cost_total, expected, "price={} qty={}", price, qty);
        }
    }

    #[test]
    fn test_profit_tiers_are_ordered() {
        for (price, qty) in [(10.0, 1), (99.99, 4), (3.5, 20)] {
            let prices = calculate_prices(price, qty);
            let p20: f64 = prices.profit_20.parse().unwrap();
            let p40: f64 = prices.profit_40.parse().unwrap();
            let p60: f64 = prices.profit_60.parse().unwrap();
            assert!(p20 > p40 && p40 > p60, "{:?}", prices);
        }
    }

    #[test]
    fn test_zero_and_negative_values_pass_through() {
        let zero = calculate_prices(0.0, 5);
        assert_eq!(zero.sale_price_total, "0.00");
        assert_eq!(zero.profit_60, "0.00");

        let negative = calculate_prices(-10.0, 2);
        assert_eq!(negative.sale_price_total, "-20.00");
        assert_eq!(negative.purchase_cost_total, "-11.00");
    }

    #[test]
    fn test_always_two_decimals() {
        let prices = calculate_prices(1.0 / 3.0, 1);
        assert_eq!(prices.sale_price_total, "0.33");
        assert_eq!(format_amount(5.0), "5.00");
    }

    #[test]
    fn test_checked_prices_rejects_overflow() {
        assert!(matches!(checked_prices(1e308, 10), Err(AppError::InvalidInput)));
        assert!(matches!(checked_prices(-1e308, 10), Err(AppError::InvalidInput)));
        assert_eq!(checked_prices(100.0, 2).unwrap(), calculate_prices(100.0, 2));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_price("7").unwrap(), 7.0);
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" -2 ").unwrap(), -2);
        assert!(matches!(parse_quantity("2.5"), Err(AppError::InvalidInput)));
        assert!(parse_quantity("two").is_err());
    }
}
