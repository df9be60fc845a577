//! Normalization of single-case detail payloads into [`CaseRecord`].
//!
//! Two structurally different payloads land here: the filing-number search
//! wraps its data in `registration_data` (with the matched case nested under
//! an arbitrary key of a `casenos` map) plus `cnr_data`/`filing_data`
//! siblings, while the CNR endpoint returns the flat record directly. Both
//! are resolved through the same per-field fallback chains, so a key missing
//! from one shape is picked up from the other.
//!
//! This is a pure function of the payload: no I/O, no state, same input
//! yields the same record.

use serde_json::Value;

use super::dates::parse_optional_date;
use super::fields::{first_object_value, object_values, resolve_string, resolve_stringish};
use super::html::decode_optional;
use crate::models::{
    CaseRecord, CaseStatus, CategoryDetails, HearingEntry, LowerCourtInfo, OrderEntry, OrderKind,
};

/// Sentinel the backend emits when no next hearing date is scheduled.
const NO_NEXT_DATE: &str = "Next Date Not Given";

/// Convert a detail payload into a normalized record.
///
/// Returns `None` when the payload lacks the minimum identity fields (no
/// cino or registration number under any known key); callers surface that
/// as a not-found outcome instead of rendering a blank record.
pub fn normalize_case_details(payload: &Value) -> Option<CaseRecord> {
    let reg_data = payload.get("registration_data");
    let filing_data = payload.get("filing_data");
    let case_info = first_object_value(reg_data.and_then(|r| r.get("casenos")));
    // CNR searches return the flat record at the top level.
    let cnr = payload.get("cnr_data").unwrap_or(payload);

    // Candidate objects in priority order; absent ones drop out of every
    // field chain at once.
    let mut sources: Vec<&Value> = Vec::new();
    if let Some(info) = case_info {
        sources.push(info);
    }
    sources.push(cnr);
    if let Some(filing) = filing_data {
        sources.push(filing);
    }

    let status = resolve_string(&[cnr], &["pend_disp"])
        .as_deref()
        .and_then(CaseStatus::from_wire);
    let disposed = status == Some(CaseStatus::Disposed);

    let record = CaseRecord {
        cino: resolve_string(&sources, &["cino"]),
        type_name: resolve_string(&sources, &["type_name", "type_name_reg"]),
        registration_no: resolve_stringish(&sources, &["reg_no"]),
        registration_year: resolve_stringish(&sources, &["reg_year"]),
        filing_no: resolve_stringish(&sources, &["fil_no"]),
        filing_year: resolve_stringish(&sources, &["fil_year"]),
        filing_date: parse_optional_date(resolve_string(&[cnr], &["date_of_filing"])),
        registration_date: parse_optional_date(resolve_string(&[cnr], &["dt_regis"])),
        status,
        // Disposal fields are meaningful only for disposed cases.
        decision_date: if disposed {
            parse_optional_date(resolve_string(&[cnr], &["date_of_decision"]))
        } else {
            None
        },
        disposal_type: if disposed { resolve_string(&[cnr], &["disposal_type"]) } else { None },
        establishment: resolve_string(
            &reg_sources(reg_data, cnr),
            &["establishment_name", "court_est_name"],
        ),
        bench: resolve_string(&[cnr], &["bench_name"]),
        coram: decode_optional(resolve_string(&[cnr], &["coram"])),
        judicial_branch: resolve_string(&[cnr], &["judicial_branch"]),
        short_order: resolve_string(&[cnr], &["short_order"]),
        petitioner: resolve_string(&sources, &["pet_name"]),
        petitioner_advocate: resolve_string(&[cnr], &["pet_adv"]),
        respondent: resolve_string(&sources, &["res_name"]),
        respondent_advocate: resolve_string(&[cnr], &["res_adv"]),
        extra_respondents: string_map_values(cnr.get("res_extra_party")),
        lower_court: normalize_lower_court(cnr),
        hearings: normalize_hearings(cnr.get("historyofcasehearing")),
        interim_orders: normalize_orders(cnr.get("interimorder"), OrderKind::Interim),
        final_orders: normalize_orders(cnr.get("finalorder"), OrderKind::Final),
        category: normalize_category(cnr.get("category_details")),
    };

    if record.is_identifiable() { Some(record) } else { None }
}

fn reg_sources<'a>(reg_data: Option<&'a Value>, cnr: &'a Value) -> Vec<&'a Value> {
    match reg_data {
        Some(reg) => vec![reg, cnr],
        None => vec![cnr],
    }
}

/// Hearing history arrives as a map keyed by arbitrary strings; entries are
/// kept in original key order.
fn normalize_hearings(raw: Option<&Value>) -> Vec<HearingEntry> {
    object_values(raw)
        .into_iter()
        .map(|hearing| HearingEntry {
            business_date: parse_optional_date(resolve_string(&[hearing], &["business_date"])),
            purpose: resolve_string(&[hearing], &["purpose_of_listing"]),
            judge: decode_optional(resolve_string(&[hearing], &["judge_name"])),
            next_hearing_date: resolve_string(&[hearing], &["hearing_date"])
                .filter(|date| date != NO_NEXT_DATE)
                .and_then(|date| parse_optional_date(Some(date))),
        })
        .collect()
}

fn normalize_orders(raw: Option<&Value>, kind: OrderKind) -> Vec<OrderEntry> {
    object_values(raw)
        .into_iter()
        .map(|order| OrderEntry {
            kind,
            order_no: resolve_stringish(&[order], &["order_no"]),
            order_date: parse_optional_date(resolve_string(&[order], &["order_date"])),
            details: decode_optional(resolve_string(&[order], &["order_details"])),
        })
        .collect()
}

fn normalize_lower_court(cnr: &Value) -> Option<LowerCourtInfo> {
    let info = LowerCourtInfo {
        court_name: resolve_string(&[cnr], &["lower_court_name"]),
        case_no: resolve_stringish(&[cnr], &["lower_court_caseno"]),
        decision_date: resolve_string(&[cnr], &["lower_court_dec_dt"]),
    };
    if info.court_name.is_none() && info.case_no.is_none() && info.decision_date.is_none() {
        None
    } else {
        Some(info)
    }
}

fn normalize_category(raw: Option<&Value>) -> Option<CategoryDetails> {
    let raw = raw?;
    let details = CategoryDetails {
        category: resolve_string(&[raw], &["category"]),
        sub_category: resolve_string(&[raw], &["sub_category"]),
    };
    if details.category.is_none() && details.sub_category.is_none() { None } else { Some(details) }
}

fn string_map_values(raw: Option<&Value>) -> Vec<String> {
    object_values(raw)
        .into_iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn cnr_payload() -> Value {
        json!({
            "cino": "JHHC010012342021",
            "type_name_reg": "W.P.(C)",
            "reg_no": "1234",
            "reg_year": "2021",
            "fil_no": "1301",
            "fil_year": "2021",
            "date_of_filing": "2021-03-15",
            "dt_regis": "2021-03-18",
            "pend_disp": "P",
            "court_est_name": "High Court of Jharkhand",
            "bench_name": "Single Bench",
            "coram": "HON&#039;BLE MR. JUSTICE A&amp;B",
            "judicial_branch": "Civil",
            "pet_name": "Ram Kumar",
            "pet_adv": "S K Sharma",
            "res_name": "State of Jharkhand",
            "res_adv": "G P Singh",
            "historyofcasehearing": {
                "hearing1": {
                    "business_date": "2023-01-10",
                    "purpose_of_listing": "ADMISSION",
                    "judge_name": "JUSTICE O&#039;BRIEN",
                    "hearing_date": "2023-02-20"
                },
                "hearing2": {
                    "business_date": "2023-02-20",
                    "purpose_of_listing": "HEARING",
                    "judge_name": "JUSTICE VERMA",
                    "hearing_date": "Next Date Not Given"
                }
            },
            "interimorder": {
                "order1": {
                    "order_no": 1,
                    "order_date": "2023-01-10",
                    "order_details": "Notice issued to O&#039;Brien &amp; Co"
                }
            },
            "category_details": {"category": "Civil Writ", "sub_category": "Service"}
        })
    }

    #[test]
    fn test_normalize_flat_cnr_payload() {
        let record = normalize_case_details(&cnr_payload()).unwrap();
        assert_eq!(record.cino.as_deref(), Some("JHHC010012342021"));
        assert_eq!(record.type_name.as_deref(), Some("W.P.(C)"));
        assert_eq!(record.status, Some(CaseStatus::Pending));
        assert_eq!(record.coram.as_deref(), Some("HON'BLE MR. JUSTICE A&B"));
        assert_eq!(record.establishment.as_deref(), Some("High Court of Jharkhand"));
        assert_eq!(record.hearings.len(), 2);
        assert_eq!(record.interim_orders.len(), 1);
        assert!(record.final_orders.is_empty());
    }

    #[test]
    fn test_normalize_filing_shape_with_fallbacks() {
        let payload = json!({
            "registration_data": {
                "establishment_name": "High Court of Jharkhand",
                "casenos": {
                    "case1": {
                        "cino": "JHHC010099882022",
                        "type_name": "Cr.M.P.",
                        "reg_no": "998",
                        "reg_year": "2022",
                        "pet_name": "Mohan Lal",
                        "res_name": "State"
                    }
                }
            },
            "cnr_data": {
                "pend_disp": "D",
                "date_of_decision": "2023-06-30",
                "disposal_type": "DISMISSED",
                "pet_adv": "R Prasad"
            }
        });

        let record = normalize_case_details(&payload).unwrap();
        // Identity comes from the nested casenos entry.
        assert_eq!(record.cino.as_deref(), Some("JHHC010099882022"));
        assert_eq!(record.type_name.as_deref(), Some("Cr.M.P."));
        // Establishment resolves from registration_data.
        assert_eq!(record.establishment.as_deref(), Some("High Court of Jharkhand"));
        // Disposal fields present because pend_disp is D.
        assert_eq!(record.status, Some(CaseStatus::Disposed));
        assert_eq!(record.disposal_type.as_deref(), Some("DISMISSED"));
        assert!(record.decision_date.is_some());
        assert_eq!(record.petitioner_advocate.as_deref(), Some("R Prasad"));
    }

    #[test]
    fn test_disposal_fields_omitted_for_pending_case() {
        let payload = json!({
            "cino": "JHHC01",
            "pend_disp": "P",
            "date_of_decision": "2023-06-30",
            "disposal_type": "DISMISSED"
        });
        let record = normalize_case_details(&payload).unwrap();
        assert_eq!(record.decision_date, None);
        assert_eq!(record.disposal_type, None);
    }

    #[test]
    fn test_missing_optional_fields_stay_independent() {
        let payload = json!({"cino": "JHHC01", "bench_name": "Division Bench"});
        let record = normalize_case_details(&payload).unwrap();
        assert_eq!(record.bench.as_deref(), Some("Division Bench"));
        // Every other field is individually absent, not an error.
        assert_eq!(record.coram, None);
        assert_eq!(record.petitioner, None);
        assert!(record.hearings.is_empty());
        assert_eq!(record.category, None);
        assert_eq!(record.lower_court, None);
    }

    #[test]
    fn test_unidentifiable_payload_is_rejected() {
        let payload = json!({"bench_name": "Division Bench", "pend_disp": "P"});
        assert_eq!(normalize_case_details(&payload), None);
        assert_eq!(normalize_case_details(&json!({})), None);
    }

    #[test]
    fn test_next_hearing_sentinel_maps_to_none() {
        let record = normalize_case_details(&cnr_payload()).unwrap();
        assert!(record.hearings[0].next_hearing_date.is_some());
        assert_eq!(record.hearings[1].next_hearing_date, None);
    }

    #[test]
    fn test_hearing_map_preserves_original_key_order() {
        let raw: Value = serde_json::from_str(
            r#"{
                "cino": "JHHC01",
                "historyofcasehearing": {
                    "z": {"purpose_of_listing": "FIRST"},
                    "a": {"purpose_of_listing": "SECOND"},
                    "m": {"purpose_of_listing": "THIRD"}
                }
            }"#,
        )
        .unwrap();
        let record = normalize_case_details(&raw).unwrap();
        let purposes: Vec<&str> =
            record.hearings.iter().filter_map(|h| h.purpose.as_deref()).collect();
        assert_eq!(purposes, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_order_details_decoded_and_numeric_order_no() {
        let record = normalize_case_details(&cnr_payload()).unwrap();
        let order = &record.interim_orders[0];
        assert_eq!(order.order_no.as_deref(), Some("1"));
        assert_eq!(order.details.as_deref(), Some("Notice issued to O'Brien & Co"));
        assert_eq!(order.kind, OrderKind::Interim);
    }

    #[test]
    fn test_extra_respondents_from_map() {
        let payload = json!({
            "cino": "JHHC01",
            "res_extra_party": {"r2": "Second Respondent", "r3": "Third Respondent"}
        });
        let record = normalize_case_details(&payload).unwrap();
        assert_eq!(record.extra_respondents, vec!["Second Respondent", "Third Respondent"]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let payload = cnr_payload();
        let first = normalize_case_details(&payload).unwrap();
        let second = normalize_case_details(&payload).unwrap();
        assert_eq!(first, second);
    }
}
