//! Payload-level response classification.
//!
//! A well-formed JSON body can still mean "no record" or "server-side
//! error". The branching below mirrors the portal's contract and must stay
//! byte-exact: `628`/`RECORD_NOT_FOUND` is the canonical not-found sentinel
//! and is never treated as a failure.

use serde_json::Value;

/// Not-found sentinel pair embedded in otherwise well-formed responses.
const NOT_FOUND_STATUS_CODE: &str = "628";
const NOT_FOUND_STATUS: &str = "RECORD_NOT_FOUND";

/// What a parsed payload means, before any shape-specific normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadClass {
    /// Canonical not-found signal, or an explicit "no data found" message.
    NotFound,
    /// The payload carried an `error` field.
    Error(String),
    /// Looks like data; hand off to the shape-specific normalizer.
    Data,
}

pub fn classify_payload(payload: &Value) -> PayloadClass {
    let status_code = payload.get("status_code").and_then(Value::as_str);
    let status = payload.get("status").and_then(Value::as_str);
    if status_code == Some(NOT_FOUND_STATUS_CODE) && status == Some(NOT_FOUND_STATUS) {
        return PayloadClass::NotFound;
    }

    if let Some(error) = payload.get("error").and_then(Value::as_str) {
        return PayloadClass::Error(error.to_string());
    }

    if let Some(message) = payload.get("message").and_then(Value::as_str)
        && message.to_lowercase().contains("no data found")
    {
        return PayloadClass::NotFound;
    }

    PayloadClass::Data
}
