//! Ordered-key fallback lookup over untyped JSON.
//!
//! The portal's endpoints disagree on where a field lives, so every
//! displayed field is resolved through an explicit key chain: primary key
//! first, then fallbacks, independently per field. A missing key never
//! blanks anything but its own field.
//!
//! Map-shaped collections (hearing histories, orders, `casenos`) are keyed
//! by arbitrary strings rather than arrays; they are converted to ordered
//! collections using the payload's own key order (serde_json is built with
//! `preserve_order` for exactly this).

use serde_json::Value;

/// Resolve a field through an ordered chain of keys across one or more
/// candidate objects. Returns the first non-empty string value.
pub fn resolve_string(sources: &[&Value], keys: &[&str]) -> Option<String> {
    for source in sources {
        for key in keys {
            if let Some(text) = non_empty_str(source.get(*key)) {
                return Some(text);
            }
        }
    }
    None
}

/// Like [`resolve_string`] but accepts numeric JSON values too, since the
/// backend sometimes sends order/registration numbers as numbers.
pub fn resolve_stringish(sources: &[&Value], keys: &[&str]) -> Option<String> {
    for source in sources {
        for key in keys {
            match source.get(*key) {
                Some(Value::Number(n)) => return Some(n.to_string()),
                value => {
                    if let Some(text) = non_empty_str(value) {
                        return Some(text);
                    }
                }
            }
        }
    }
    None
}

/// Object values in original key order; anything that is not an object
/// yields an empty vec.
pub fn object_values(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    }
}

/// First value of an object map in key order. Used for `casenos`, where the
/// details endpoints nest the single matched case under an arbitrary key.
pub fn first_object_value(value: Option<&Value>) -> Option<&Value> {
    match value {
        Some(Value::Object(map)) => map.values().next(),
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();
    if text.is_empty() { None } else { Some(text.to_string()) }
}
