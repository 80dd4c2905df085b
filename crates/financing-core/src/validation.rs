use rust_decimal::Decimal;

use crate::error::FinancingError;
use crate::types::{CalculationInput, ValidationResult};
use crate::FinancingResult;

/// Validate a calculation input. Rules are checked in order and the first
/// failure wins; no messages accumulate.
pub fn validate(input: &CalculationInput) -> ValidationResult {
    if input.amount <= Decimal::ZERO {
        return ValidationResult::invalid("amount must be greater than zero");
    }
    if input.installment_count == 0 {
        return ValidationResult::invalid("installment count must be a positive integer");
    }
    if input.nominal_annual_rate < Decimal::ZERO {
        return ValidationResult::invalid("nominal annual rate cannot be negative");
    }
    ValidationResult::ok()
}

/// Bridge a failed validation into the error the orchestrator propagates.
pub fn ensure_valid(input: &CalculationInput) -> FinancingResult<()> {
    let outcome = validate(input);
    if outcome.valid {
        Ok(())
    } else {
        Err(FinancingError::InvalidInput {
            field: "input".into(),
            reason: outcome.message.unwrap_or_else(|| "invalid input".into()),
        })
    }
}
