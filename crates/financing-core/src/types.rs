use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as annual percentages (50 = 50%). Never as decimals.
pub type Percent = Decimal;

/// Optional add-on fee percentages, each additive on top of the nominal
/// annual rate. Absent fields mean zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    #[serde(default)]
    pub processor_tariff: Percent,
    #[serde(default)]
    pub risk_fee: Percent,
    #[serde(default)]
    pub collector_surcharge: Percent,
    #[serde(default)]
    pub taxes: Percent,
}

impl FeeSchedule {
    /// Summed fee surcharge over the nominal rate.
    pub fn total(&self) -> Percent {
        self.processor_tariff + self.risk_fee + self.collector_surcharge + self.taxes
    }
}

/// Input parameters for one financing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Principal amount of the loan.
    pub amount: Money,
    /// Number of installments (periods).
    pub installment_count: u32,
    /// Nominal annual interest rate as a percentage (e.g., 120 for 120%).
    pub nominal_annual_rate: Percent,
    /// Additive fee percentages; all default to zero.
    #[serde(default)]
    pub fees: FeeSchedule,
}

/// Complete output of a financing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Financing coefficient: multiplier on principal per installment (6 dp).
    pub coefficient: Decimal,
    /// Coefficient grossed up by VAT (6 dp).
    pub coefficient_with_tax: Decimal,
    /// Total financing cost as a simple percentage of principal.
    pub direct_rate: Percent,
    /// Annualized cost accounting for compounding.
    pub effective_annual_rate: Percent,
    /// Total financial cost percentage (CFT).
    pub total_financial_cost: Percent,
    pub installment_value: Money,
    pub installment_value_with_tax: Money,
    pub total_payable: Money,
    pub total_payable_with_tax: Money,
    pub total_interest: Money,
    pub total_interest_with_tax: Money,
    /// Per-installment breakdown; produced by the day-count method only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<Vec<InstallmentDetail>>,
}

/// One row of the day-count method's per-installment breakdown.
///
/// The installment value is the uniform quota, identical across indices;
/// only the discount coefficient varies with the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentDetail {
    /// 1-based installment index.
    pub index: u32,
    pub amount: Money,
    pub resultant_rate: Percent,
    pub installment_value: Money,
    /// Discount coefficient for this index (6 dp).
    pub discount_coefficient: Decimal,
    /// Discount coefficient grossed up by VAT (6 dp).
    pub discount_coefficient_with_tax: Decimal,
    pub effective_annual_rate: Percent,
    pub total_financial_cost: Percent,
    pub direct_rate: Percent,
}

/// Outcome of input validation: a validity flag plus the first failure
/// message, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            message: Some(message.into()),
        }
    }
}
