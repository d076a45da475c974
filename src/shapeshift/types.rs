use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::common::utils::opt_f64;

/// Market info for one pair, or the list of all markets when queried without a pair.
///
/// The payload is kept as sent; accessors read the commonly used fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketInfo(Value);

impl MarketInfo {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn pair(&self) -> Option<&str> {
        self.0.get("pair").and_then(Value::as_str)
    }

    pub fn rate(&self) -> Option<f64> {
        opt_f64(&self.0, "rate")
    }

    pub fn limit(&self) -> Option<f64> {
        opt_f64(&self.0, "limit")
    }

    pub fn min(&self) -> Option<f64> {
        opt_f64(&self.0, "min").or_else(|| opt_f64(&self.0, "minimum"))
    }

    pub fn max_limit(&self) -> Option<f64> {
        opt_f64(&self.0, "maxLimit")
    }

    pub fn miner_fee(&self) -> Option<f64> {
        opt_f64(&self.0, "minerFee")
    }

    /// Per-pair entries of a list payload; a single-pair payload yields itself.
    pub fn entries(&self) -> Vec<MarketInfo> {
        match &self.0 {
            Value::Array(items) => items.iter().cloned().map(MarketInfo).collect(),
            other => vec![MarketInfo(other.clone())],
        }
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Coin catalog keyed by symbol, as returned by `getcoins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedCoinsList(Value);

impl SupportedCoinsList {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn symbols(&self) -> Vec<&str> {
        match &self.0 {
            Value::Object(coins) => coins.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn coin(&self, symbol: &str) -> Option<&Value> {
        self.0.get(symbol)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateAddressResult {
    #[serde(rename = "isValid", default, deserialize_with = "null_as_false")]
    pub is_valid: bool,
    /// Error text reported by the service; a non-string value is kept as its JSON text.
    #[serde(
        default,
        deserialize_with = "lenient_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    /// Any further fields the service sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn lenient_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(message) => Some(message),
        other => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionStatus(pub Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(pub Value);
