//! Currency rounding shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to the nearest whole currency unit, half away from zero.
///
/// Statutory contributions and loan installments are paid in whole units,
/// so each share is rounded with this function on its own before any sum
/// is taken.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("1234.49").unwrap()), Decimal::from(1234));
/// assert_eq!(round_currency(Decimal::from_str("1234.5").unwrap()), Decimal::from(1235));
/// assert_eq!(round_currency(Decimal::from_str("-2.5").unwrap()), Decimal::from(-3));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to two decimal places, half away from zero.
pub fn round_two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
