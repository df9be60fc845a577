//! Court case explorer: search High Court case records from the terminal.
//!
//! Wraps the court portal's JSON API behind typed search criteria, a
//! defensive response normalizer and a per-screen search state machine, with
//! persistent favorites/recents/theme preferences.

pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod state;
pub mod store;
pub mod utils;

pub use client::PortalClient;
pub use error::SearchError;
pub use models::{SearchCriteria, SearchOutcome};
pub use state::SearchScreen;
