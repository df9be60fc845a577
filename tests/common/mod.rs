//! Shared test utilities for integration tests
#![allow(dead_code)]

use serde_json::{Map, Value, json};

/// Builder for CNR-style flat case-details payloads.
pub struct CaseDetailsBuilder {
    fields: Map<String, Value>,
    hearings: Vec<Value>,
    interim_orders: Vec<Value>,
    final_orders: Vec<Value>,
}

impl CaseDetailsBuilder {
    /// Create a builder pre-filled with an identifiable pending case.
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("cino".into(), json!("JHHC010012342023"));
        fields.insert("type_name".into(), json!("W.P.(C)"));
        fields.insert("reg_no".into(), json!("1234"));
        fields.insert("reg_year".into(), json!("2023"));
        fields.insert("fil_no".into(), json!("5678"));
        fields.insert("fil_year".into(), json!("2023"));
        fields.insert("pend_disp".into(), json!("P"));
        Self {
            fields,
            hearings: Vec::new(),
            interim_orders: Vec::new(),
            final_orders: Vec::new(),
        }
    }

    /// Set or override a top-level field.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Mark the case disposed with the given decision date.
    pub fn disposed(self, date: &str, disposal_type: &str) -> Self {
        self.field("pend_disp", json!("D"))
            .field("date_of_decision", json!(date))
            .field("disposal_type", json!(disposal_type))
    }

    /// Append a hearing row.
    pub fn with_hearing(mut self, business_date: &str, purpose: &str, next_date: &str) -> Self {
        self.hearings.push(json!({
            "business_date": business_date,
            "purpose_of_listing": purpose,
            "judge_name": "HON'BLE THE CHIEF JUSTICE",
            "hearing_date": next_date,
        }));
        self
    }

    /// Append an interim order row.
    pub fn with_interim_order(mut self, order_no: &str, order_date: &str) -> Self {
        self.interim_orders.push(json!({
            "order_no": order_no,
            "order_date": order_date,
            "order_details": format!("Order {order_no}"),
        }));
        self
    }

    /// Append a final order row.
    pub fn with_final_order(mut self, order_no: &str, order_date: &str) -> Self {
        self.final_orders.push(json!({
            "order_no": order_no,
            "order_date": order_date,
            "order_details": format!("Final order {order_no}"),
        }));
        self
    }

    /// Build the flat payload shape the CNR endpoint returns.
    pub fn build(self) -> Value {
        let mut payload = self.fields;
        if !self.hearings.is_empty() {
            let mut map = Map::new();
            for (index, hearing) in self.hearings.into_iter().enumerate() {
                map.insert(format!("{index}"), hearing);
            }
            payload.insert("historyofcasehearing".into(), Value::Object(map));
        }
        if !self.interim_orders.is_empty() {
            let mut map = Map::new();
            for (index, order) in self.interim_orders.into_iter().enumerate() {
                map.insert(format!("{index}"), order);
            }
            payload.insert("interimorder".into(), Value::Object(map));
        }
        if !self.final_orders.is_empty() {
            let mut map = Map::new();
            for (index, order) in self.final_orders.into_iter().enumerate() {
                map.insert(format!("{index}"), order);
            }
            payload.insert("finalorder".into(), Value::Object(map));
        }
        Value::Object(payload)
    }

    /// Build the nested filing-search shape: the same record wrapped under
    /// `registration_data` with `cnr_data` alongside.
    pub fn build_filing_shape(self) -> Value {
        let flat = self.build();
        json!({
            "registration_data": { "casenos": { "0": flat.clone() } },
            "cnr_data": flat,
        })
    }
}

impl Default for CaseDetailsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for advocate/party listing payloads.
pub struct ListingBuilder {
    establishment: Option<String>,
    cases: Vec<Value>,
}

impl ListingBuilder {
    pub fn new() -> Self {
        Self { establishment: Some("High Court of Jharkhand".to_string()), cases: Vec::new() }
    }

    /// Drop the establishment field, making the payload an empty hit.
    pub fn without_establishment(mut self) -> Self {
        self.establishment = None;
        self
    }

    pub fn with_case(mut self, cino: &str, petitioner: &str, respondent: &str) -> Self {
        self.cases.push(json!({
            "cino": cino,
            "type_name": "W.P.(C)",
            "reg_no": format!("{}", 100 + self.cases.len()),
            "reg_year": "2023",
            "pet_name": petitioner,
            "res_name": respondent,
        }));
        self
    }

    pub fn build(self) -> Value {
        let mut payload = Map::new();
        if let Some(establishment) = self.establishment {
            payload.insert("establishment_name".into(), json!(establishment));
        }
        if !self.cases.is_empty() {
            let mut casenos = Map::new();
            for (index, case) in self.cases.into_iter().enumerate() {
                casenos.insert(format!("{index}"), case);
            }
            payload.insert("casenos".into(), Value::Object(casenos));
        }
        Value::Object(payload)
    }
}

impl Default for ListingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The portal's record-not-found sentinel payload.
pub fn not_found_payload() -> Value {
    json!({ "status_code": "628", "status": "RECORD_NOT_FOUND" })
}
