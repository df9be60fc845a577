//! Error taxonomy for the search pipeline.
//!
//! Everything that can go wrong between a form submit and a rendered result
//! collapses into [`SearchError`]. Validation variants are raised before any
//! request is dispatched; the remaining variants are produced at the client
//! boundary and folded into `SearchOutcome::Failed`, so callers never see a
//! raw `reqwest` or `serde_json` error. A "record not found" response is not
//! an error at all; it is a distinct `SearchOutcome` variant.

use thiserror::Error;

/// Failure reasons surfaced to the presentation layer.
///
/// Every variant is recoverable in place: validation errors keep the form
/// open, the rest carry a retry affordance.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A required search field was empty; caught before dispatch.
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    /// Year fields must be exactly four ASCII digits.
    #[error("year must be a 4-digit number, got {0:?}")]
    InvalidYear(String),

    /// The request exceeded its timeout bound and was aborted.
    #[error("request timed out")]
    Timeout,

    /// Connectivity, DNS, or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {0}")]
    Http(u16),

    /// Response body was empty, not JSON, or not the expected shape.
    #[error("invalid response from server")]
    InvalidResponse,

    /// The payload itself carried an `error` field.
    #[error("server reported an error: {0}")]
    Server(String),

    /// PDF endpoint returned data without the PDF magic prefix.
    #[error("response is not a valid PDF document")]
    InvalidPdf,
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else if let Some(status) = err.status() {
            SearchError::Http(status.as_u16())
        } else {
            SearchError::Network(err.to_string())
        }
    }
}

impl SearchError {
    /// True for validation failures that never reached the network layer.
    pub fn is_validation(&self) -> bool {
        matches!(self, SearchError::MissingField(_) | SearchError::InvalidYear(_))
    }
}
