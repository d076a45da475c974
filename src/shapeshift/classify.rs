//! Separates application-level errors from data in 200-status bodies.
//!
//! The service never signals its own failures through the HTTP status; an
//! `error` field inside a JSON object is the only marker.

use serde_json::Value;

use crate::common::{ApiErrorKind, ShapeShiftError};
use crate::shapeshift::endpoints::{EndpointDescriptor, Normalization};

const UNKNOWN_PAIR: &str = "Unknown pair";

/// Returns the embedded error message of an object body, if any.
///
/// Lists and scalars never carry an error. A `null` error counts as absent;
/// a non-string error is reported through its JSON text.
pub fn find_error(body: &Value) -> Option<String> {
    match body.as_object()?.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Raises the body's embedded error unless `endpoint` tolerates it, then applies
/// the endpoint's normalization.
pub fn classify(mut body: Value, endpoint: &EndpointDescriptor) -> Result<Value, ShapeShiftError> {
    if let Some(message) = find_error(&body) {
        if !endpoint.error_tolerant {
            let kind = if message == UNKNOWN_PAIR {
                ApiErrorKind::UnknownPair
            } else {
                ApiErrorKind::Generic
            };
            tracing::warn!(operation = %endpoint.operation, error = %message, "service reported an error");
            return Err(ShapeShiftError::Api { kind, message });
        }
        tracing::debug!(operation = %endpoint.operation, error = %message, "error field passed through");
    }

    if let Some(normalization) = endpoint.normalization {
        normalize(&mut body, normalization);
    }

    Ok(body)
}

pub fn normalize(body: &mut Value, normalization: Normalization) {
    match normalization {
        Normalization::IsValidCasing => normalize_is_valid_casing(body),
    }
}

// An `isValid` already sent by the service wins; `isvalid` never reaches the caller.
fn normalize_is_valid_casing(body: &mut Value) {
    let Some(object) = body.as_object_mut() else {
        return;
    };
    let lower = object.remove("isvalid");
    if object.get("isValid").is_some_and(|value| !value.is_null()) {
        return;
    }
    if let Some(value) = lower {
        tracing::trace!("renamed isvalid to isValid");
        object.insert("isValid".to_string(), value);
    }
}
