//! Money helpers over fixed-point decimals.
//!
//! Every monetary value in an estimate is rounded to two decimal places as
//! soon as it is computed, so summed line items never drift from what the
//! customer was shown.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places (banker-free, half-up).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a float amount into a two-decimal money value.
///
/// Non-finite inputs collapse to zero; they only arise from arithmetic on
/// values that are themselves validated upstream.
pub fn money_from_f64(amount: f64) -> Decimal {
    round_money(Decimal::from_f64(amount).unwrap_or_default())
}

/// Multiplies an hourly rate by a fractional hour count, rounded to cents.
pub fn times_hours(rate: Decimal, hours: f64) -> Decimal {
    round_money(rate * Decimal::from_f64(hours).unwrap_or_default())
}

/// Applies a flat percentage (expressed as a fraction) to an amount.
pub fn percent_of(amount: Decimal, fraction: Decimal) -> Decimal {
    round_money(amount * fraction)
}
