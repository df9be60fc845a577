use super::case::{CaseListing, CaseRecord};
use crate::error::SearchError;

/// Successful search data, shaped by the endpoint that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum FoundCases {
    /// Full details of a single case (filing-number and CNR searches).
    Details(Box<CaseRecord>),
    /// Summary listing (advocate and party-name searches).
    Listing(CaseListing),
}

/// Terminal result of one search action.
///
/// Every search resolves to exactly one of these three within the request
/// timeout bound; the caller is never left unresolved. `NotFound` is a
/// well-formed answer, distinct from failure.
#[derive(Debug)]
pub enum SearchOutcome {
    Found(FoundCases),
    NotFound,
    Failed(SearchError),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchOutcome::NotFound)
    }
}
