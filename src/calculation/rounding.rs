//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to two decimal places, midpoints away from zero.
///
/// Payslip fields are rounded once at assembly and payrun totals once after
/// summation; intermediate values are never rounded.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("17.245").unwrap()), Decimal::from_str("17.25").unwrap());
/// assert_eq!(round_money(Decimal::from_str("17.244").unwrap()), Decimal::from_str("17.24").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(dec("0.005")), dec("0.01"));
        assert_eq!(round_money(dec("-0.005")), dec("-0.01"));
    }

    #[test]
    fn test_repeating_fraction() {
        // 10 minutes as hours
        assert_eq!(round_money(dec("10") / dec("60")), dec("0.17"));
    }

    #[test]
    fn test_already_rounded_unchanged() {
        assert_eq!(round_money(dec("150.00")), dec("150"));
        assert_eq!(round_money(dec("7.5")), dec("7.50"));
    }
}
