//! HTML entity decoding for API text fields.
//!
//! Judge names and order details come back with a small, fixed set of HTML
//! entities. The replacement set and order match the upstream portal's own
//! encoding, so `&amp;lt;` decodes the same way it always has.

/// Decode the entities the portal is known to emit.
pub fn decode_entities(text: &str) -> String {
    text.replace("&#039;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
}

/// Decode an optional field, dropping values that are empty after trimming.
pub fn decode_optional(text: Option<String>) -> Option<String> {
    let decoded = decode_entities(text?.as_str());
    let trimmed = decoded.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
