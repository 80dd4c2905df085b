use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{FeeSchedule, Percent};

/// VAT gross-up factor applied to tax-inclusive coefficients (21%).
pub const TAX_GROSS_UP: Decimal = dec!(1.21);

const PERCENT_DIVISOR: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Resultant annual rate: the nominal rate plus every add-on fee percentage.
pub fn resultant_rate(nominal_annual_rate: Percent, fees: &FeeSchedule) -> Percent {
    nominal_annual_rate + fees.total()
}

/// Effective monthly rate as a decimal fraction (120% annual → 0.10).
/// Full precision, never rounded.
pub fn monthly_rate(resultant_rate: Percent) -> Decimal {
    resultant_rate / PERCENT_DIVISOR / MONTHS_PER_YEAR
}

/// An annual percentage as a decimal fraction (50 → 0.5).
pub fn rate_fraction(rate: Percent) -> Decimal {
    rate / PERCENT_DIVISOR
}
