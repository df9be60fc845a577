//! Normalization of heterogeneous portal payloads.
//!
//! # Error Handling Strategy
//!
//! The portal's endpoints return structurally different JSON for the same
//! logical data, sometimes with fields missing, HTML-encoded, or spelled
//! differently per endpoint. This module follows a **per-field graceful
//! degradation** approach:
//!
//! - **Field failures are independent**: every displayed field resolves
//!   through its own ordered fallback chain; one missing key never blanks
//!   the rest of the record.
//! - **Record-level floor**: a payload with no identity fields (no cino, no
//!   registration number) is rejected as not-found rather than emitted as a
//!   mostly-blank record.
//! - **No panics on bad data**: unparseable dates, non-object maps and
//!   unexpected value types all degrade to `None`/empty collections.
//!
//! All functions here are pure; classification and normalization of a
//! payload are repeatable and side-effect free.

pub mod case_details;
pub mod classify;
pub mod dates;
pub mod fields;
pub mod html;
pub mod listing;

pub use case_details::normalize_case_details;
pub use classify::{PayloadClass, classify_payload};
pub use dates::{format_display_date, parse_api_date};
pub use html::decode_entities;
pub use listing::{normalize_case_listing, normalize_case_types};
