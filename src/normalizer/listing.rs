//! Normalization of listing-shaped payloads: advocate/party search results
//! and the case-type dropdown.

use serde_json::Value;

use super::fields::{resolve_string, resolve_stringish};
use crate::models::{CaseListing, CaseSummary, CaseTypeOption};

/// Convert an advocate/party search payload into a listing.
///
/// A payload counts as a hit only when it carries both the establishment
/// name and a `casenos` map; anything else is treated as not-found by the
/// caller, matching the portal's own success check.
pub fn normalize_case_listing(payload: &Value) -> Option<CaseListing> {
    let establishment = resolve_string(&[payload], &["establishment_name"]);
    let casenos = payload.get("casenos")?.as_object()?;
    establishment.as_ref()?;

    let cases = casenos
        .values()
        .map(|case| CaseSummary {
            cino: resolve_string(&[case], &["cino"]),
            type_name: resolve_string(&[case], &["type_name", "type_name_reg"]),
            registration_no: resolve_stringish(&[case], &["reg_no"]),
            registration_year: resolve_stringish(&[case], &["reg_year"]),
            petitioner: resolve_string(&[case], &["pet_name"]),
            respondent: resolve_string(&[case], &["res_name"]),
        })
        .collect();

    Some(CaseListing { establishment, cases })
}

/// Convert the case-type payload (a map keyed by arbitrary strings) into
/// dropdown options. An empty object yields an empty list, not an error;
/// non-object entries are skipped.
pub fn normalize_case_types(payload: &Value) -> Vec<CaseTypeOption> {
    let Some(map) = payload.as_object() else {
        return Vec::new();
    };

    map.values()
        .enumerate()
        .filter(|(_, item)| item.is_object())
        .map(|(index, item)| CaseTypeOption {
            label: resolve_string(&[item], &["type_name"])
                .unwrap_or_else(|| "Unknown Case Type".to_string()),
            value: resolve_stringish(&[item], &["case_type"])
                .unwrap_or_else(|| format!("unknown_{index}")),
        })
        .collect()
}
