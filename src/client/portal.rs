use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::models::{CaseTypeOption, FoundCases, OrderKind, SearchCriteria, SearchOutcome};
use crate::normalizer::{
    PayloadClass, classify_payload, normalize_case_details, normalize_case_listing,
    normalize_case_types,
};

/// Timeout for the JSON search/lookup endpoints.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
/// The PDF endpoint ships whole documents and gets a longer bound.
const PDF_TIMEOUT: Duration = Duration::from_secs(45);

const CASE_TYPE_ENDPOINT: &str = "fetchCaseTypeHcNapix.php";
const ORDER_PDF_ENDPOINT: &str = "displayPdfNapix.php";

/// Base64 of `%PDF-1`, the magic prefix every portal PDF starts with.
const PDF_BASE64_MAGIC: &str = "JVBERi0x";
/// Payloads must be strictly longer than this to count as a document.
const PDF_MIN_BASE64_LEN: usize = 100;

/// HTTP client for the court portal's JSON API.
///
/// One request per user action, each with an explicit timeout; every
/// failure mode is folded into a value (`SearchOutcome` or `SearchError`),
/// never a panic or an unresolved future beyond the timeout bound.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;
        Ok(Self { http, base_url: trim_trailing_slash(base_url.into()) })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one search to a terminal outcome.
    ///
    /// Validation failures, timeouts, transport errors and malformed bodies
    /// all come back as `SearchOutcome::Failed`; the caller always gets
    /// exactly one of found / not-found / failed.
    pub async fn search(&self, criteria: &SearchCriteria) -> SearchOutcome {
        if let Err(err) = criteria.validate() {
            return SearchOutcome::Failed(err);
        }

        let payload = match self.post_json(criteria.endpoint(), &criteria.request_body()).await {
            Ok(payload) => payload,
            Err(err) => return SearchOutcome::Failed(err),
        };

        match classify_payload(&payload) {
            PayloadClass::NotFound => SearchOutcome::NotFound,
            PayloadClass::Error(message) => {
                warn!(endpoint = criteria.endpoint(), %message, "portal reported an error");
                SearchOutcome::Failed(SearchError::Server(message))
            }
            PayloadClass::Data => {
                if criteria.expects_listing() {
                    match normalize_case_listing(&payload) {
                        Some(listing) => SearchOutcome::Found(FoundCases::Listing(listing)),
                        None => SearchOutcome::NotFound,
                    }
                } else {
                    match normalize_case_details(&payload) {
                        Some(record) => {
                            SearchOutcome::Found(FoundCases::Details(Box::new(record)))
                        }
                        None => SearchOutcome::NotFound,
                    }
                }
            }
        }
    }

    /// Fetch the case-type dropdown options. An empty object from the
    /// server yields an empty list so the caller can keep its retry
    /// affordance enabled.
    pub async fn fetch_case_types(&self) -> Result<Vec<CaseTypeOption>, SearchError> {
        let url = format!("{}/{}", self.base_url, CASE_TYPE_ENDPOINT);
        debug!(%url, "fetching case types");

        let response = self.http.get(&url).timeout(SEARCH_TIMEOUT).send().await?;
        let payload = parse_body(response).await?;
        Ok(normalize_case_types(&payload))
    }

    /// Fetch a court order document as raw PDF bytes.
    ///
    /// The endpoint returns base64 either bare or wrapped in a JSON
    /// envelope; both are accepted, validated against the PDF magic prefix
    /// before decoding.
    pub async fn fetch_order_pdf(
        &self,
        cino: &str,
        order_no: &str,
        kind: OrderKind,
    ) -> Result<Vec<u8>, SearchError> {
        let url = format!("{}/{}", self.base_url, ORDER_PDF_ENDPOINT);
        let body = PdfRequest { cino, order_no, order_kind: kind.as_wire() };

        let response =
            self.http.post(&url).json(&body).timeout(PDF_TIMEOUT).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Http(status.as_u16()));
        }

        let text = response.text().await?;
        decode_pdf_body(&text)
    }

    /// POST a flat JSON body and parse the response text as JSON.
    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Value, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "dispatching search request");

        let response = self.http.post(&url).json(body).timeout(SEARCH_TIMEOUT).send().await?;
        parse_body(response).await
    }
}

/// POST body for the order-document endpoint.
#[derive(Serialize)]
struct PdfRequest<'a> {
    cino: &'a str,
    order_no: &'a str,
    order_kind: &'static str,
}

/// Read the body as text first, then parse; an empty or non-JSON body is an
/// `InvalidResponse`, never a raw parse failure escaping to the UI.
async fn parse_body(response: reqwest::Response) -> Result<Value, SearchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Http(status.as_u16()));
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
        return Err(SearchError::InvalidResponse);
    }

    serde_json::from_str(&text).map_err(|err| {
        warn!(%err, "response body is not valid JSON");
        SearchError::InvalidResponse
    })
}

/// Decode a PDF endpoint body: either a bare base64 string or a JSON
/// envelope carrying `base64Data`.
pub fn decode_pdf_body(text: &str) -> Result<Vec<u8>, SearchError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidResponse);
    }

    let base64_data = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => match map.get("base64Data").and_then(Value::as_str) {
            Some(data) => data.trim().to_string(),
            None => return Err(SearchError::InvalidPdf),
        },
        Ok(Value::String(data)) => data.trim().to_string(),
        _ => trimmed.to_string(),
    };

    if !base64_data.starts_with(PDF_BASE64_MAGIC) || base64_data.len() <= PDF_MIN_BASE64_LEN {
        return Err(SearchError::InvalidPdf);
    }

    BASE64.decode(base64_data.as_bytes()).map_err(|_| SearchError::InvalidPdf)
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Base64 of a minimal `%PDF-1.4` header padded past the length floor.
    fn fake_pdf_base64() -> String {
        let mut bytes = b"%PDF-1.4\n".to_vec();
        bytes.extend(std::iter::repeat_n(b' ', 120));
        BASE64.encode(&bytes)
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = PortalClient::new("http://portal.example/api/").unwrap();
        assert_eq!(client.base_url(), "http://portal.example/api");
    }

    #[test]
    fn test_decode_bare_base64_pdf() {
        let encoded = fake_pdf_base64();
        assert!(encoded.starts_with(PDF_BASE64_MAGIC));
        let bytes = decode_pdf_body(&encoded).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_decode_json_wrapped_pdf() {
        let body = format!(r#"{{"fileName":"order.pdf","base64Data":"{}"}}"#, fake_pdf_base64());
        let bytes = decode_pdf_body(&body).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_decode_rejects_missing_magic() {
        let encoded = BASE64.encode(vec![b'a'; 200]);
        assert!(matches!(decode_pdf_body(&encoded), Err(SearchError::InvalidPdf)));
    }

    #[test]
    fn test_decode_rejects_short_payload() {
        // Right magic, but far too short to be a document.
        assert!(matches!(decode_pdf_body("JVBERi0x"), Err(SearchError::InvalidPdf)));
    }

    #[test]
    fn test_decode_length_floor_is_strict() {
        // Exactly at the floor is still too short.
        let at_floor =
            format!("{}{}", PDF_BASE64_MAGIC, "A".repeat(PDF_MIN_BASE64_LEN - PDF_BASE64_MAGIC.len()));
        assert_eq!(at_floor.len(), PDF_MIN_BASE64_LEN);
        assert!(matches!(decode_pdf_body(&at_floor), Err(SearchError::InvalidPdf)));

        // One past the floor clears the length check.
        let past_floor = fake_pdf_base64();
        assert!(past_floor.len() > PDF_MIN_BASE64_LEN);
        assert!(decode_pdf_body(&past_floor).is_ok());
    }

    #[test]
    fn test_decode_rejects_empty_body() {
        assert!(matches!(decode_pdf_body("   "), Err(SearchError::InvalidResponse)));
    }

    #[test]
    fn test_decode_rejects_envelope_without_data() {
        assert!(matches!(
            decode_pdf_body(r#"{"fileName":"order.pdf"}"#),
            Err(SearchError::InvalidPdf)
        ));
    }
}
