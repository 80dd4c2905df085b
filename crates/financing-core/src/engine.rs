//! Orchestrator: the single entry point wiring validation, rate
//! composition, the selected coefficient strategy, derived metrics, payment
//! aggregation, and (day-count only) the per-installment breakdown.

use crate::coefficient::CalculationMethod;
use crate::metrics::{
    coefficient_with_tax, day_count_effective_annual_rate, day_count_total_financial_cost,
    direct_rate, uniform_effective_annual_rate, uniform_total_financial_cost,
};
use crate::payments::{installment_value, total_interest, total_payable};
use crate::rates::resultant_rate;
use crate::schedule::build_installment_details;
use crate::types::{CalculationInput, CalculationResult};
use crate::validation::ensure_valid;
use crate::FinancingResult;

/// Compute the full set of financing indicators for one loan.
///
/// Validation failures surface as `FinancingError::InvalidInput` before any
/// arithmetic runs; there are no partial results. Given identical input and
/// method the output is bit-identical — the function holds no state.
pub fn compute_financing(
    input: &CalculationInput,
    method: CalculationMethod,
) -> FinancingResult<CalculationResult> {
    ensure_valid(input)?;

    let rate = resultant_rate(input.nominal_annual_rate, &input.fees);
    let n = input.installment_count;

    let coefficient = method.coefficient(rate, n);
    let coefficient_tax = coefficient_with_tax(coefficient);

    let (effective_annual_rate, total_financial_cost) = match method {
        CalculationMethod::UniformRate => (
            uniform_effective_annual_rate(rate),
            uniform_total_financial_cost(coefficient, n),
        ),
        CalculationMethod::DayCount => (
            day_count_effective_annual_rate(input.amount, rate, n),
            day_count_total_financial_cost(input.amount, rate, n),
        ),
    };

    let installment = installment_value(input.amount, coefficient);
    let installment_tax = installment_value(input.amount, coefficient_tax);
    let payable = total_payable(installment, n);
    let payable_tax = total_payable(installment_tax, n);

    let mut result = CalculationResult {
        coefficient,
        coefficient_with_tax: coefficient_tax,
        direct_rate: direct_rate(coefficient, n),
        effective_annual_rate,
        total_financial_cost,
        installment_value: installment,
        installment_value_with_tax: installment_tax,
        total_payable: payable,
        total_payable_with_tax: payable_tax,
        total_interest: total_interest(payable, input.amount),
        total_interest_with_tax: total_interest(payable_tax, input.amount),
        installments: None,
    };

    if method == CalculationMethod::DayCount {
        result.installments = Some(build_installment_details(
            input.amount,
            rate,
            n,
            &result,
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinancingError;
    use crate::types::FeeSchedule;
    use rust_decimal_macros::dec;

    fn uniform_input() -> CalculationInput {
        CalculationInput {
            amount: dec!(10000),
            installment_count: 12,
            nominal_annual_rate: dec!(120),
            fees: Default::default(),
        }
    }

    #[test]
    fn test_validation_short_circuits_before_arithmetic() {
        let mut input = uniform_input();
        input.amount = dec!(-100);
        let err = compute_financing(&input, CalculationMethod::UniformRate).unwrap_err();
        let FinancingError::InvalidInput { reason, .. } = err;
        assert_eq!(reason, "amount must be greater than zero");
    }

    #[test]
    fn test_uniform_method_produces_no_breakdown() {
        let result = compute_financing(&uniform_input(), CalculationMethod::UniformRate).unwrap();
        assert!(result.installments.is_none());
    }

    #[test]
    fn test_day_count_breakdown_matches_term() {
        let mut input = uniform_input();
        input.installment_count = 3;
        input.nominal_annual_rate = dec!(50);
        let result = compute_financing(&input, CalculationMethod::DayCount).unwrap();
        assert_eq!(result.installments.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_fees_feed_the_resultant_rate() {
        // 110% nominal + 10 points of fees must match 120% with no fees.
        let mut with_fees = uniform_input();
        with_fees.nominal_annual_rate = dec!(110);
        with_fees.fees = FeeSchedule {
            processor_tariff: dec!(4),
            risk_fee: dec!(3),
            collector_surcharge: dec!(2),
            taxes: dec!(1),
        };
        let a = compute_financing(&with_fees, CalculationMethod::UniformRate).unwrap();
        let b = compute_financing(&uniform_input(), CalculationMethod::UniformRate).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic_output() {
        let input = uniform_input();
        let first = compute_financing(&input, CalculationMethod::UniformRate).unwrap();
        let second = compute_financing(&input, CalculationMethod::UniformRate).unwrap();
        assert_eq!(first, second);
    }
}
