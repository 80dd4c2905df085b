use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places carried by financing coefficients.
pub const COEFFICIENT_DP: u32 = 6;
/// Decimal places carried by currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Half-up rounding for coefficients. Applied exactly once, at the point a
/// coefficient becomes an output value; intermediates stay at full precision.
pub fn round_coefficient(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(COEFFICIENT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Half-up rounding for currency amounts.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_coefficient_rounds_half_up() {
        // Banker's rounding would give 0.123456; half-up must give 0.123457.
        assert_eq!(round_coefficient(dec!(0.1234565)), dec!(0.123457));
        assert_eq!(round_coefficient(dec!(0.1234564)), dec!(0.123456));
    }

    #[test]
    fn test_currency_rounds_half_up() {
        assert_eq!(round_currency(dec!(1467.625)), dec!(1467.63));
        assert_eq!(round_currency(dec!(1467.624)), dec!(1467.62));
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let v = round_currency(dec!(99.995));
        assert_eq!(round_currency(v), v);
    }
}
