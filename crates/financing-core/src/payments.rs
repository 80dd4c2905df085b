//! Payment aggregation: turns a coefficient into currency amounts. Every
//! value is rounded half-up to 2 decimals exactly once, at the point it is
//! produced; downstream aggregates build on the already-rounded figures.

use rust_decimal::Decimal;

use crate::rounding::round_currency;
use crate::types::Money;

/// Periodic payment: principal times the financing coefficient.
pub fn installment_value(amount: Money, coefficient: Decimal) -> Money {
    round_currency(amount * coefficient)
}

/// Total amount payable over the term.
pub fn total_payable(installment_value: Money, installment_count: u32) -> Money {
    round_currency(installment_value * Decimal::from(installment_count))
}

/// Total interest: payable minus principal.
pub fn total_interest(total_payable: Money, amount: Money) -> Money {
    round_currency(total_payable - amount)
}
