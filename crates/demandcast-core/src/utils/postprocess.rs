//! Forecast post-processing utilities
//!
//! Functions applied to raw model output before it is returned to callers.

/// Clamp every value to a minimum of 0
pub fn clamp_non_negative(data: &[f64]) -> Vec<f64> {
    data.iter().map(|v| v.max(0.0)).collect()
}

/// Round every value to the given number of decimal places
pub fn round_to(data: &[f64], decimals: u32) -> Vec<f64> {
    let factor = 10f64.powi(decimals as i32);
    data.iter().map(|v| (v * factor).round() / factor).collect()
}
