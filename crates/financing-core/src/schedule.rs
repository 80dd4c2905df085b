//! Per-installment detail expansion for the day-count method. Each index
//! carries its own discount coefficient; the remaining figures are copies of
//! the aggregate result for display convenience.

use crate::coefficient::discount_coefficient;
use crate::metrics::coefficient_with_tax;
use crate::rounding::round_coefficient;
use crate::types::{CalculationResult, InstallmentDetail, Money, Percent};

/// Expand an aggregate day-count result into one record per installment.
pub fn build_installment_details(
    amount: Money,
    resultant_rate: Percent,
    installment_count: u32,
    aggregate: &CalculationResult,
) -> Vec<InstallmentDetail> {
    let mut details = Vec::with_capacity(installment_count as usize);

    for index in 1..=installment_count {
        let discount = round_coefficient(discount_coefficient(resultant_rate, index));
        details.push(InstallmentDetail {
            index,
            amount,
            resultant_rate,
            installment_value: aggregate.installment_value,
            discount_coefficient: discount,
            discount_coefficient_with_tax: coefficient_with_tax(discount),
            effective_annual_rate: aggregate.effective_annual_rate,
            total_financial_cost: aggregate.total_financial_cost,
            direct_rate: aggregate.direct_rate,
        });
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn aggregate_stub() -> CalculationResult {
        CalculationResult {
            coefficient: dec!(0.360525),
            coefficient_with_tax: dec!(0.436235),
            direct_rate: dec!(8.1575),
            effective_annual_rate: dec!(34.644072),
            total_financial_cost: dec!(7.542246),
            installment_value: dec!(3605.25),
            installment_value_with_tax: dec!(4362.35),
            total_payable: dec!(10815.75),
            total_payable_with_tax: dec!(13087.05),
            total_interest: dec!(815.75),
            total_interest_with_tax: dec!(3087.05),
            installments: None,
        }
    }

    #[test]
    fn test_one_record_per_installment_in_order() {
        let details = build_installment_details(dec!(10000), dec!(50), 3, &aggregate_stub());
        assert_eq!(details.len(), 3);
        let indices: Vec<u32> = details.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_discount_coefficients_per_index() {
        let details = build_installment_details(dec!(10000), dec!(50), 3, &aggregate_stub());
        assert_eq!(details[0].discount_coefficient, dec!(0.962567));
        assert_eq!(details[1].discount_coefficient, dec!(0.924064));
        assert_eq!(details[2].discount_coefficient, dec!(0.887102));
    }

    #[test]
    fn test_tax_adjusted_discount_coefficients() {
        let details = build_installment_details(dec!(10000), dec!(50), 3, &aggregate_stub());
        assert_eq!(details[0].discount_coefficient_with_tax, dec!(1.164706));
        assert_eq!(details[1].discount_coefficient_with_tax, dec!(1.118117));
        assert_eq!(details[2].discount_coefficient_with_tax, dec!(1.073393));
    }

    #[test]
    fn test_aggregate_figures_are_copied_verbatim() {
        let aggregate = aggregate_stub();
        let details = build_installment_details(dec!(10000), dec!(50), 3, &aggregate);
        for detail in &details {
            assert_eq!(detail.installment_value, aggregate.installment_value);
            assert_eq!(detail.effective_annual_rate, aggregate.effective_annual_rate);
            assert_eq!(detail.total_financial_cost, aggregate.total_financial_cost);
            assert_eq!(detail.direct_rate, aggregate.direct_rate);
            assert_eq!(detail.amount, dec!(10000));
            assert_eq!(detail.resultant_rate, dec!(50));
        }
    }

    #[test]
    fn test_single_installment_schedule() {
        let details = build_installment_details(dec!(10000), dec!(50), 1, &aggregate_stub());
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].discount_coefficient, dec!(0.962567));
    }

    #[test]
    fn test_zero_rate_discounts_are_unity() {
        let details = build_installment_details(dec!(10000), Decimal::ZERO, 2, &aggregate_stub());
        assert_eq!(details[0].discount_coefficient, Decimal::ONE);
        assert_eq!(details[1].discount_coefficient, Decimal::ONE);
    }
}
