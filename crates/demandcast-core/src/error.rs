//! Forecasting error types

use thiserror::Error;

/// Result type alias for forecasting operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while fitting or predicting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("history must contain at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid series data
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Model has not been fitted yet
    #[error("model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("numerical error: {0}")]
    NumericalError(String),
}
