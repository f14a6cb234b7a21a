//! Money formatting utilities using rust_decimal for precision
//!
//! Prices and totals stay `Decimal` throughout; they are rounded to two
//! decimal places (half away from zero) only when rendered.

use rust_decimal::prelude::*;

/// Currency label appended to every rendered amount
pub const CURRENCY_LABEL: &str = "lei";

/// Rounding strategy for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to two decimal places
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with exactly two decimal places, e.g. `74.00`
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(DECIMAL_PLACES);
    rounded.to_string()
}

/// Render an amount followed by the currency label, e.g. `74.00 lei`
///
/// The label is a literal suffix; no locale is consulted.
pub fn format_lei(value: Decimal) -> String {
    format!("{} {}", format_amount(value), CURRENCY_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(format_amount(Decimal::from(74)), "74.00");
        assert_eq!(format_amount(Decimal::new(375, 1)), "37.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(5, 3)), "0.01");
        assert_eq!(format_amount(Decimal::new(10999, 3)), "11.00");
        assert_eq!(format_amount(Decimal::new(1234, 3)), "1.23");
    }

    #[test]
    fn test_accumulation_precision() {
        // 0.1 + 0.2 is exact in Decimal
        let sum = Decimal::new(1, 1) + Decimal::new(2, 1);
        assert_eq!(format_amount(sum), "0.30");

        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += Decimal::new(1, 2);
        }
        assert_eq!(format_amount(total), "10.00");
    }

    #[test]
    fn test_format_lei() {
        assert_eq!(format_lei(Decimal::from(111)), "111.00 lei");
        assert_eq!(format_lei(Decimal::new(3700, 2)), "37.00 lei");
    }
}
