//! Time series prediction algorithms
//!
//! Models follow a fit-predict pattern: fit against an observed series,
//! then project a number of future steps.

pub mod linear_regression;

/// Common trait for all time series predictors
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> crate::Result<()>;

    /// Predict future values
    fn predict(&self, steps: usize) -> crate::Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
