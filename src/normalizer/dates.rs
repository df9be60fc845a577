//! Date parsing and display formatting.
//!
//! The API mixes `YYYY-MM-DD`, datetime strings and placeholder values like
//! `0000-00-00`. Anything unparseable becomes `None` and renders as "N/A"
//! downstream; nothing here panics on bad input.

use chrono::NaiveDate;

/// Placeholder the backend uses for an unset date.
const NULL_DATE: &str = "0000-00-00";

/// Parse a date-like API value. Empty strings and placeholders yield `None`.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() || raw == NULL_DATE {
        return None;
    }

    // Datetime values carry the date in the leading 10 chars.
    let date_part = raw.split(&[' ', 'T'][..]).next().unwrap_or(raw);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d-%m-%Y"))
        .ok()
}

pub fn parse_optional_date(raw: Option<String>) -> Option<NaiveDate> {
    parse_api_date(raw?.as_str())
}

/// Fixed display format: day, abbreviated month, 4-digit year.
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
