//! Coefficient engine: the two interchangeable financing strategies.
//!
//! Both produce the same contract — resultant rate + installment count →
//! financing coefficient — and differ only in how installments are
//! discounted. Downstream metrics and payment aggregation are identical
//! for either method.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::rates::{monthly_rate, rate_fraction};
use crate::rounding::round_coefficient;
use crate::types::Percent;

/// Days discounted for the first installment.
pub const FIRST_PERIOD_DAYS: Decimal = dec!(28);
/// Days discounted for each installment after the first.
pub const LATER_PERIOD_DAYS: Decimal = dec!(30);
/// Commercial year basis.
pub const COMMERCIAL_YEAR_DAYS: Decimal = dec!(360);

/// Selects how the financing coefficient is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// French amortization: one effective monthly rate, one annuity
    /// coefficient for every installment.
    UniformRate,
    /// Day-count discounting: 28 days for the first installment, 30 more
    /// for each subsequent one, over a 360-day commercial year.
    DayCount,
}

impl CalculationMethod {
    /// Financing coefficient under this method, rounded to 6 decimals.
    pub fn coefficient(&self, resultant_rate: Percent, installment_count: u32) -> Decimal {
        match self {
            CalculationMethod::UniformRate => {
                uniform_coefficient(resultant_rate, installment_count)
            }
            CalculationMethod::DayCount => {
                day_count_coefficient(resultant_rate, installment_count)
            }
        }
    }
}

/// Annuity coefficient: m(1+m)^n / ((1+m)^n - 1), 6 dp.
///
/// A zero monthly rate degenerates to an even principal split of 1/n.
pub fn uniform_coefficient(resultant_rate: Percent, installment_count: u32) -> Decimal {
    let m = monthly_rate(resultant_rate);
    if m.is_zero() {
        return round_coefficient(Decimal::ONE / Decimal::from(installment_count));
    }

    let compounded = (Decimal::ONE + m).powu(installment_count as u64);
    round_coefficient(m * compounded / (compounded - Decimal::ONE))
}

/// Discount coefficient for a single 1-based installment index.
///
/// Index 1 discounts over 28 days; index i > 1 over 28 + 30(i-1) days,
/// compounded as factor28 * factor30^(i-1). Full precision; callers round
/// when the value becomes an output.
pub fn discount_coefficient(resultant_rate: Percent, index: u32) -> Decimal {
    let annual = rate_fraction(resultant_rate);
    let factor28 = Decimal::ONE + annual * FIRST_PERIOD_DAYS / COMMERCIAL_YEAR_DAYS;
    if index <= 1 {
        return Decimal::ONE / factor28;
    }

    let factor30 = Decimal::ONE + annual * LATER_PERIOD_DAYS / COMMERCIAL_YEAR_DAYS;
    Decimal::ONE / (factor28 * factor30.powu((index - 1) as u64))
}

/// Sum of the per-installment discount coefficients over 1..=n.
pub fn discount_coefficient_sum(resultant_rate: Percent, installment_count: u32) -> Decimal {
    (1..=installment_count)
        .map(|i| discount_coefficient(resultant_rate, i))
        .sum()
}

/// Day-count coefficient: the 1/n capital share divided by the average
/// discount coefficient, i.e. 1 / Σ d_i, rounded to 6 dp.
///
/// At a zero resultant rate every discount factor is 1 and the general
/// formula yields exactly 1/n; the early return mirrors the uniform-rate
/// strategy and sidesteps the summation.
pub fn day_count_coefficient(resultant_rate: Percent, installment_count: u32) -> Decimal {
    if resultant_rate.is_zero() {
        return round_coefficient(Decimal::ONE / Decimal::from(installment_count));
    }

    round_coefficient(Decimal::ONE / discount_coefficient_sum(resultant_rate, installment_count))
}
