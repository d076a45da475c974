// src/common/utils.rs
use crate::common::ShapeShiftError;
use serde_json::Value;

/// Two coin symbols addressed together, or no pair filter at all.
///
/// A single symbol without its counterpart is not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinPair {
    Any,
    Pair { coin1: String, coin2: String },
}

impl CoinPair {
    pub fn new(coin1: Option<&str>, coin2: Option<&str>) -> Result<Self, ShapeShiftError> {
        match (coin1, coin2) {
            (None, None) => Ok(CoinPair::Any),
            (Some(coin1), Some(coin2)) => {
                validate_segment(coin1, "coin1")?;
                validate_segment(coin2, "coin2")?;
                Ok(CoinPair::Pair {
                    coin1: coin1.to_string(),
                    coin2: coin2.to_string(),
                })
            }
            _ => Err(ShapeShiftError::InvalidArgument(
                "both coins or neither must be supplied".to_string(),
            )),
        }
    }

    /// `coin1_coin2`, or the empty string when no pair is set.
    pub fn identifier(&self) -> String {
        match self {
            CoinPair::Any => String::new(),
            CoinPair::Pair { coin1, coin2 } => format!("{}_{}", coin1, coin2),
        }
    }
}

pub fn build_pair_identifier(
    coin1: Option<&str>,
    coin2: Option<&str>,
) -> Result<String, ShapeShiftError> {
    Ok(CoinPair::new(coin1, coin2)?.identifier())
}

// A value spliced into a resource path must be non-empty, a single segment,
// and never a dot segment. Everything else is percent-encoded when rendered.
pub fn validate_segment(value: &str, name: &str) -> Result<(), ShapeShiftError> {
    if value.is_empty() {
        return Err(ShapeShiftError::InvalidArgument(format!(
            "{} cannot be empty",
            name
        )));
    }
    if value.contains('/') {
        return Err(ShapeShiftError::InvalidArgument(format!(
            "{} cannot contain '/': {}",
            name, value
        )));
    }
    if value == "." || value == ".." {
        return Err(ShapeShiftError::InvalidArgument(format!(
            "{} cannot be a dot segment: {}",
            name, value
        )));
    }
    Ok(())
}

fn invalid_format(field_name: &str) -> ShapeShiftError {
    ShapeShiftError::InvalidResponse(format!("Invalid {} format", field_name))
}

fn missing_field(field_name: &str) -> ShapeShiftError {
    ShapeShiftError::InvalidResponse(format!("Missing {} field", field_name))
}

// Parse a string to a finite f64, return a ShapeShiftError if the parsing fails
pub fn parse_f64(value: &str, field_name: &str) -> Result<f64, ShapeShiftError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid_format(field_name))
}

/// Reads a float field that the service sends either as a JSON number or a numeric string.
pub fn field_f64(body: &Value, field_name: &str) -> Result<f64, ShapeShiftError> {
    match body.get(field_name) {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| invalid_format(field_name)),
        Some(Value::String(s)) => parse_f64(s, field_name),
        Some(_) => Err(invalid_format(field_name)),
        None => Err(missing_field(field_name)),
    }
}

// Truncates toward zero; NaN, infinities and out-of-range values are rejected
fn truncate_to_i64(value: f64, field_name: &str) -> Result<i64, ShapeShiftError> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Ok(truncated as i64)
    } else {
        Err(invalid_format(field_name))
    }
}

/// Reads an integer field; fractional numbers are truncated toward zero.
pub fn field_i64(body: &Value, field_name: &str) -> Result<i64, ShapeShiftError> {
    match body.get(field_name) {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => Ok(v),
            None => {
                let v = n.as_f64().ok_or_else(|| invalid_format(field_name))?;
                truncate_to_i64(v, field_name)
            }
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(v) => Ok(v),
                Err(_) => truncate_to_i64(parse_f64(s, field_name)?, field_name),
            }
        }
        Some(_) => Err(invalid_format(field_name)),
        None => Err(missing_field(field_name)),
    }
}

/// Lenient read used by the market-info accessors.
pub(crate) fn opt_f64(body: &Value, field_name: &str) -> Option<f64> {
    let value = match body.get(field_name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}
