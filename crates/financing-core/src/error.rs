use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinancingError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}
