//! Derived metrics: direct rate, tax-adjusted coefficient, effective annual
//! rate, and total financial cost (CFT). All take the financing coefficient
//! (or the raw rate inputs) produced by the coefficient engine.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::coefficient::{
    discount_coefficient_sum, COMMERCIAL_YEAR_DAYS, FIRST_PERIOD_DAYS, LATER_PERIOD_DAYS,
};
use crate::rates::{monthly_rate, TAX_GROSS_UP};
use crate::rounding::round_coefficient;
use crate::types::{Money, Percent};

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Direct rate: total financing cost as a simple percentage of principal.
pub fn direct_rate(coefficient: Decimal, installment_count: u32) -> Percent {
    ((coefficient * Decimal::from(installment_count)) - Decimal::ONE) * PERCENT
}

/// Coefficient grossed up by the 21% VAT factor, 6 dp.
pub fn coefficient_with_tax(coefficient: Decimal) -> Decimal {
    round_coefficient(coefficient * TAX_GROSS_UP)
}

/// Effective annual rate under the uniform-rate method: the monthly rate
/// compounded over twelve months.
pub fn uniform_effective_annual_rate(resultant_rate: Percent) -> Percent {
    let m = monthly_rate(resultant_rate);
    ((Decimal::ONE + m).powu(12) - Decimal::ONE) * PERCENT
}

/// Aggregate financial cost under the day-count method: the principal share
/// not recovered by the average discounted installment.
pub fn day_count_financial_cost(
    amount: Money,
    resultant_rate: Percent,
    installment_count: u32,
) -> Money {
    if installment_count == 0 {
        return Decimal::ZERO;
    }
    let mean = discount_coefficient_sum(resultant_rate, installment_count)
        / Decimal::from(installment_count);
    amount * (Decimal::ONE - mean)
}

/// Total financial cost percentage under the day-count method.
pub fn day_count_total_financial_cost(
    amount: Money,
    resultant_rate: Percent,
    installment_count: u32,
) -> Percent {
    if amount.is_zero() {
        return Decimal::ZERO;
    }
    day_count_financial_cost(amount, resultant_rate, installment_count) / amount * PERCENT
}

/// Effective annual rate under the day-count method: the total payable,
/// annualized over the 28 + 30(n-1) day horizon on the 360-day basis.
///
/// Falls back to the total-financial-cost percentage when the horizon or
/// the principal is degenerate (preserved source behavior; unreachable
/// through the orchestrator, which validates both).
pub fn day_count_effective_annual_rate(
    amount: Money,
    resultant_rate: Percent,
    installment_count: u32,
) -> Percent {
    let total_days =
        FIRST_PERIOD_DAYS + LATER_PERIOD_DAYS * (Decimal::from(installment_count) - Decimal::ONE);
    let years = total_days / COMMERCIAL_YEAR_DAYS;
    if years <= Decimal::ZERO || amount <= Decimal::ZERO {
        return day_count_total_financial_cost(amount, resultant_rate, installment_count);
    }

    let financial_cost = day_count_financial_cost(amount, resultant_rate, installment_count);
    let total_payable = amount + financial_cost;
    ((total_payable / amount).powd(Decimal::ONE / years) - Decimal::ONE) * PERCENT
}

/// Total financial cost percentage under the uniform-rate method: the gross
/// payback multiple annualized over the term.
pub fn uniform_total_financial_cost(coefficient: Decimal, installment_count: u32) -> Percent {
    let n = Decimal::from(installment_count);
    let payback_multiple = coefficient * n;
    (payback_multiple.powd(MONTHS_PER_YEAR / n) - Decimal::ONE) * PERCENT
}
