//! # demandcast-core
//!
//! Forecasting primitives for the demandcast service.
//!
//! The crate is pure computation: it fits models to a numeric series and
//! projects future values, with no I/O or HTTP concerns.
//!
//! ## Example
//!
//! ```rust
//! use demandcast_core::prelude::*;
//!
//! let history = vec![12.0, 14.0, 16.0, 18.0];
//! let mut model = LinearRegression::new();
//! model.fit(&history).unwrap();
//!
//! let raw = model.predict(3).unwrap();
//! let forecast = round_to(&clamp_non_negative(&raw), 2);
//! assert_eq!(forecast, vec![20.0, 22.0, 24.0]);
//! ```

pub mod algorithms;
pub mod utils;
mod error;

pub use error::{ForecastError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::linear_regression::LinearRegression;
    pub use crate::algorithms::Predictor;
    pub use crate::error::{ForecastError, Result};
    pub use crate::utils::postprocess::{clamp_non_negative, round_to};
}
