use chrono::NaiveDate;

use super::criteria::CaseStatus;

/// Normalized projection of a raw case payload.
///
/// Every field that the API may omit is an `Option`; the `"N/A"` sentinel is
/// substituted only at the rendering boundary so the model stays type-clean.
/// Disposal fields are populated only when `status` is `Disposed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseRecord {
    pub cino: Option<String>,
    pub type_name: Option<String>,
    pub registration_no: Option<String>,
    pub registration_year: Option<String>,
    pub filing_no: Option<String>,
    pub filing_year: Option<String>,
    pub filing_date: Option<NaiveDate>,
    pub registration_date: Option<NaiveDate>,
    pub status: Option<CaseStatus>,
    pub decision_date: Option<NaiveDate>,
    pub disposal_type: Option<String>,
    pub establishment: Option<String>,
    pub bench: Option<String>,
    /// Judge/coram, HTML-entity decoded.
    pub coram: Option<String>,
    pub judicial_branch: Option<String>,
    pub short_order: Option<String>,
    pub petitioner: Option<String>,
    pub petitioner_advocate: Option<String>,
    pub respondent: Option<String>,
    pub respondent_advocate: Option<String>,
    pub extra_respondents: Vec<String>,
    pub lower_court: Option<LowerCourtInfo>,
    pub hearings: Vec<HearingEntry>,
    pub interim_orders: Vec<OrderEntry>,
    pub final_orders: Vec<OrderEntry>,
    pub category: Option<CategoryDetails>,
}

impl CaseRecord {
    /// A record is addressable if it can be identified by CNR or
    /// registration number. Payloads failing this check are treated as
    /// not-found rather than rendered half-blank.
    pub fn is_identifiable(&self) -> bool {
        self.cino.is_some() || self.registration_no.is_some()
    }
}

/// Subordinate court details attached to a high-court case.
#[derive(Debug, Clone, PartialEq)]
pub struct LowerCourtInfo {
    pub court_name: Option<String>,
    pub case_no: Option<String>,
    pub decision_date: Option<String>,
}

/// One row of the hearing history, in original listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct HearingEntry {
    pub business_date: Option<NaiveDate>,
    pub purpose: Option<String>,
    /// HTML-entity decoded.
    pub judge: Option<String>,
    /// Absent when the source carries the "Next Date Not Given" sentinel.
    pub next_hearing_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Interim,
    Final,
}

impl OrderKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            OrderKind::Interim => "interim",
            OrderKind::Final => "final",
        }
    }
}

/// One court order, interim or final.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEntry {
    pub kind: OrderKind,
    pub order_no: Option<String>,
    pub order_date: Option<NaiveDate>,
    /// HTML-entity decoded.
    pub details: Option<String>,
}

/// Case category classification.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetails {
    pub category: Option<String>,
    pub sub_category: Option<String>,
}

/// One row of an advocate/party search listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSummary {
    pub cino: Option<String>,
    pub type_name: Option<String>,
    pub registration_no: Option<String>,
    pub registration_year: Option<String>,
    pub petitioner: Option<String>,
    pub respondent: Option<String>,
}

/// Result of an advocate or party-name search: the establishment plus one
/// summary row per matched case, in original key order.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseListing {
    pub establishment: Option<String>,
    pub cases: Vec<CaseSummary>,
}

/// One entry of the case-type dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTypeOption {
    pub label: String,
    pub value: String,
}
