//! Two-decimal rendering of monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with exactly two decimal places.
///
/// Halves round away from zero.
///
/// # Examples
///
/// ```
/// use payroll_registry::calculation::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(500)), "500.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
