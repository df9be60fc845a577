use serde::Serialize;

use crate::error::SearchError;

/// Two-state lifecycle discriminator for a case record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Pending,
    Disposed,
}

impl CaseStatus {
    /// Wire value used by the remote API (`pend_disp` field).
    pub fn as_wire(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "P",
            CaseStatus::Disposed => "D",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "P" => Some(CaseStatus::Pending),
            "D" => Some(CaseStatus::Disposed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "PENDING",
            CaseStatus::Disposed => "DISPOSED",
        }
    }
}

/// One search request as captured from a form submit.
///
/// Created on submit, consumed once by the client, discarded after producing
/// a `SearchOutcome` (the state machine keeps a clone for retry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Search by filing number within a case type.
    Filing { case_type: String, filing_no: String, filing_year: String },
    /// Search all cases registered under an advocate's name.
    Advocate { advocate_name: String, reg_year: String, status: CaseStatus },
    /// Search all cases involving a party name.
    Party { party_name: String, reg_year: String, status: CaseStatus },
    /// Fetch full details for a single case by its CNR identifier.
    Cnr { cino: String },
}

impl SearchCriteria {
    /// Validate before dispatch: required fields non-empty, years 4 digits.
    /// Validation failures never reach the network layer.
    pub fn validate(&self) -> Result<(), SearchError> {
        match self {
            SearchCriteria::Filing { case_type, filing_no, filing_year } => {
                require(case_type, "case_type")?;
                require(filing_no, "fil_no")?;
                require_year(filing_year)
            }
            SearchCriteria::Advocate { advocate_name, reg_year, .. } => {
                require(advocate_name, "advocate_name")?;
                require_year(reg_year)
            }
            SearchCriteria::Party { party_name, reg_year, .. } => {
                require(party_name, "party_name")?;
                require_year(reg_year)
            }
            SearchCriteria::Cnr { cino } => require(cino, "cino"),
        }
    }

    /// Endpoint path relative to the portal base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchCriteria::Filing { .. } => "searchByfilingNoHcNapix.php",
            SearchCriteria::Advocate { .. } => "searchAdvocateHcNapix.php",
            SearchCriteria::Party { .. } => "searchByPartyNameHcNapix.php",
            SearchCriteria::Cnr { .. } => "searchByCNRNapix.php",
        }
    }

    /// Flat JSON request body with the keys the API expects, borrowing the
    /// trimmed field values.
    pub fn request_body(&self) -> RequestBody<'_> {
        match self {
            SearchCriteria::Filing { case_type, filing_no, filing_year } => RequestBody::Filing {
                case_type: case_type.trim(),
                fil_no: filing_no.trim(),
                fil_year: filing_year.trim(),
            },
            SearchCriteria::Advocate { advocate_name, reg_year, status } => {
                RequestBody::Advocate {
                    pend_disp: status.as_wire(),
                    advocate_name: advocate_name.trim(),
                    reg_year: reg_year.trim(),
                }
            }
            SearchCriteria::Party { party_name, reg_year, status } => RequestBody::Party {
                pend_disp: status.as_wire(),
                party_name: party_name.trim(),
                reg_year: reg_year.trim(),
            },
            SearchCriteria::Cnr { cino } => RequestBody::Cnr { cino: cino.trim() },
        }
    }

    /// Whether the endpoint answers with a single-case details payload
    /// (filing/CNR) or a multi-case listing (advocate/party).
    pub fn expects_listing(&self) -> bool {
        matches!(self, SearchCriteria::Advocate { .. } | SearchCriteria::Party { .. })
    }
}

/// Serialized POST body for a search endpoint. Each variant carries exactly
/// the keys its endpoint reads; the variant tag itself never hits the wire.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestBody<'a> {
    Filing { case_type: &'a str, fil_no: &'a str, fil_year: &'a str },
    Advocate { pend_disp: &'static str, advocate_name: &'a str, reg_year: &'a str },
    Party { pend_disp: &'static str, party_name: &'a str, reg_year: &'a str },
    Cnr { cino: &'a str },
}

fn require(value: &str, field: &'static str) -> Result<(), SearchError> {
    if value.trim().is_empty() { Err(SearchError::MissingField(field)) } else { Ok(()) }
}

fn require_year(year: &str) -> Result<(), SearchError> {
    let year = year.trim();
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(SearchError::InvalidYear(year.to_string()))
    }
}
