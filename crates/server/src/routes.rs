//! API route handlers

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use demandcast_core::algorithms::linear_regression::LinearRegression;
use demandcast_core::algorithms::Predictor;
use demandcast_core::utils::postprocess::{clamp_non_negative, round_to};
use demandcast_core::ForecastError;

const DEFAULT_HORIZON: i64 = 7;

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    /// Observed series; elements are coerced to numbers by the handler
    #[serde(default)]
    pub history: Vec<Value>,
    /// Number of future steps to forecast
    #[serde(default = "default_horizon")]
    pub horizon: Value,
}

fn default_horizon() -> Value {
    Value::from(DEFAULT_HORIZON)
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub forecast: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the HTTP layer
///
/// Validation failures describe a malformed request; everything that goes
/// wrong past validation is reported as a computation failure.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Computation(String),
}

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        ApiError::Computation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Validation(error) => (StatusCode::BAD_REQUEST, error),
            ApiError::Computation(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Coerce a JSON value to a number
///
/// Numbers pass through; numeric strings are parsed. Anything else fails.
fn coerce_number(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("could not convert {value} to a number")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("could not convert \"{s}\" to a number")),
        _ => Err(format!("could not convert {value} to a number")),
    }
}

fn coerce_series(values: &[Value]) -> Result<Vec<f64>, String> {
    values.iter().map(coerce_number).collect()
}

/// Coerce a JSON value to an integer horizon
///
/// Floats are truncated toward zero; integer strings are parsed.
fn coerce_horizon(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(|| format!("invalid horizon value: {value}")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid horizon value: \"{s}\"")),
        _ => Err(format!("invalid horizon value: {value}")),
    }
}

pub async fn predict(
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    if req.history.len() < 2 {
        return Err(ApiError::Validation(
            "history must contain at least 2 values".to_string(),
        ));
    }

    let horizon = coerce_horizon(&req.horizon).map_err(ApiError::Computation)?;
    if horizon < 1 {
        return Err(ApiError::Validation(
            "horizon must be a positive integer".to_string(),
        ));
    }

    let history = coerce_series(&req.history).map_err(ApiError::Computation)?;

    let mut model = LinearRegression::new();
    model.fit(&history)?;
    let raw = model.predict(horizon as usize)?;

    let forecast = round_to(&clamp_non_negative(&raw), 2);
    Ok(Json(ForecastResponse { forecast }))
}
