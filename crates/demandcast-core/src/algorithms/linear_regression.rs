//! Linear regression for time series forecasting
//!
//! Uses ordinary least squares (OLS) to fit a linear trend to a series,
//! treating each observation's zero-based position as its time index.

use crate::algorithms::Predictor;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Linear regression model for time series
///
/// Fits y = intercept + slope * t where t is the time index.
///
/// # Example
///
/// ```rust
/// use demandcast_core::algorithms::linear_regression::LinearRegression;
/// use demandcast_core::algorithms::Predictor;
///
/// let data = vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
/// let mut model = LinearRegression::new();
/// model.fit(&data).unwrap();
///
/// let forecast = model.predict(3).unwrap();
/// // Should predict approximately [22, 24, 26]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Y-intercept
    intercept: f64,
    /// Slope (trend per time step)
    slope: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// R-squared value
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a new linear regression model
    pub fn new() -> Self {
        Self {
            intercept: 0.0,
            slope: 0.0,
            n_observations: 0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Get the slope (trend per time step)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get R-squared (coefficient of determination)
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Predict the value at a specific time index
    pub fn predict_at(&self, t: f64) -> Result<f64> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        Ok(self.intercept + self.slope * t)
    }
}

impl Predictor for LinearRegression {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidData(format!(
                "non-finite value {bad} in series"
            )));
        }

        let n = data.len() as f64;
        self.n_observations = data.len();

        // Time indices run 0..n-1, so their mean is (n-1)/2
        let mean_t = (data.len() - 1) as f64 / 2.0;
        let mean_y = data.iter().sum::<f64>() / n;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (i, &y) in data.iter().enumerate() {
            let dt = i as f64 - mean_t;
            covariance += dt * (y - mean_y);
            variance += dt * dt;
        }

        if variance <= f64::EPSILON {
            return Err(ForecastError::NumericalError(
                "zero variance in time index".to_string(),
            ));
        }

        self.slope = covariance / variance;
        self.intercept = mean_y - self.slope * mean_t;

        let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let predicted = self.intercept + self.slope * i as f64;
                (y - predicted).powi(2)
            })
            .sum();

        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }

        let mut forecasts = Vec::with_capacity(steps);
        for i in 0..steps {
            let t = (self.n_observations + i) as f64;
            forecasts.push(self.intercept + self.slope * t);
        }

        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_recovers_line() {
        let data: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        assert!((model.slope() - 2.0).abs() < 1e-10);
        assert!((model.intercept() - 10.0).abs() < 1e-10);
        assert!(model.r_squared() > 0.99);

        let forecast = model.predict(3).unwrap();
        assert!((forecast[0] - 30.0).abs() < 1e-10);
        assert!((forecast[1] - 32.0).abs() < 1e-10);
        assert!((forecast[2] - 34.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_series_has_zero_slope() {
        let mut model = LinearRegression::new();
        model.fit(&[5.0, 5.0, 5.0, 5.0]).unwrap();

        assert!(model.slope().abs() < 1e-10);
        assert!((model.r_squared() - 1.0).abs() < 1e-10);

        let forecast = model.predict(2).unwrap();
        assert!((forecast[0] - 5.0).abs() < 1e-10);
        assert!((forecast[1] - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_fit_insufficient_data() {
        let mut model = LinearRegression::new();

        let result = model.fit(&[3.0]);

        assert_eq!(
            result.unwrap_err(),
            ForecastError::InsufficientData {
                required: 2,
                actual: 1,
            }
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_fit_rejects_non_finite() {
        let mut model = LinearRegression::new();

        let result = model.fit(&[1.0, f64::NAN, 3.0]);
        match result.unwrap_err() {
            ForecastError::InvalidData(msg) => assert!(msg.contains("NaN")),
            other => panic!("expected InvalidData, got {other:?}"),
        }

        let result = model.fit(&[1.0, f64::INFINITY]);
        assert!(matches!(result, Err(ForecastError::InvalidData(_))));
    }

    #[test]
    fn test_predict_not_fitted() {
        let model = LinearRegression::new();
        assert_eq!(model.predict(5).unwrap_err(), ForecastError::NotFitted);
        assert_eq!(model.predict_at(0.0).unwrap_err(), ForecastError::NotFitted);
    }

    #[test]
    fn test_predict_zero_steps() {
        let mut model = LinearRegression::new();
        model.fit(&[1.0, 2.0]).unwrap();
        assert!(model.predict(0).unwrap().is_empty());
    }

    #[test]
    fn test_predict_at_matches_predict() {
        let data = vec![3.0, 6.0, 9.0, 12.0];
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        let forecast = model.predict(2).unwrap();
        let at_4 = model.predict_at(4.0).unwrap();
        let at_5 = model.predict_at(5.0).unwrap();

        assert!((forecast[0] - at_4).abs() < 1e-10);
        assert!((forecast[1] - at_5).abs() < 1e-10);
    }

    #[test]
    fn test_refit_replaces_previous_fit() {
        let mut model = LinearRegression::new();

        model.fit(&[1.0, 2.0, 3.0]).unwrap();
        let first = model.predict(1).unwrap();
        assert!((first[0] - 4.0).abs() < 1e-10);

        model.fit(&[10.0, 20.0, 30.0]).unwrap();
        let second = model.predict(1).unwrap();
        assert!((second[0] - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_downward_trend_goes_negative() {
        let mut model = LinearRegression::new();
        model.fit(&[3.0, 2.0, 1.0]).unwrap();

        let forecast = model.predict(3).unwrap();
        assert!((forecast[0] - 0.0).abs() < 1e-10);
        assert!((forecast[1] - (-1.0)).abs() < 1e-10);
        assert!((forecast[2] - (-2.0)).abs() < 1e-10);
    }
}
