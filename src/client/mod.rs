//! Remote data client for the court portal API.
//!
//! # Error Handling Strategy
//!
//! All failure modes (validation, timeout, transport, non-2xx status,
//! unparseable body, payload-level error field) are caught at this
//! boundary and converted into values. Searches resolve to a
//! [`SearchOutcome`](crate::models::SearchOutcome); auxiliary fetches
//! return `Result<_, SearchError>`. Nothing here is fatal to the process:
//! every error carries a retry affordance in the presentation layer.

pub mod portal;

pub use portal::PortalClient;
