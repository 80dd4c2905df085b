pub mod coefficient;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod payments;
pub mod rates;
pub mod rounding;
pub mod schedule;
pub mod types;
pub mod validation;

pub use coefficient::CalculationMethod;
pub use engine::compute_financing;
pub use error::FinancingError;
pub use types::*;

/// Standard result type for all financing-core operations
pub type FinancingResult<T> = Result<T, FinancingError>;
