//! Data models for court case search.
//!
//! This module defines the structures flowing through the pipeline:
//!
//! - [`SearchCriteria`] - Validated input captured from a search form
//! - [`CaseRecord`] / [`CaseListing`] - Normalized projections of raw payloads
//! - [`SearchOutcome`] - The three-way terminal result of every search
//! - [`ThemeConfig`] - Explicitly passed rendering configuration
//!
//! Records are derived once from raw JSON by the `normalizer` module and
//! never mutated afterwards; they live only as long as one results view.

pub mod case;
pub mod criteria;
pub mod outcome;
pub mod theme;

pub use case::{
    CaseListing, CaseRecord, CaseSummary, CaseTypeOption, CategoryDetails, HearingEntry,
    LowerCourtInfo, OrderEntry, OrderKind,
};
pub use criteria::{CaseStatus, RequestBody, SearchCriteria};
pub use outcome::{FoundCases, SearchOutcome};
pub use theme::{ThemeConfig, ThemeMode};
