use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Fallback portal base URL when `COURT_API_BASE_URL` is unset.
const DEFAULT_BASE_URL: &str = "http://10.134.8.12/jhc_app_api";

/// Portal API base URL, from the environment with a built-in default.
pub fn portal_base_url() -> String {
    env::var("COURT_API_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Directory for the persistent key-value store.
///
/// `COURT_EXPLORER_DATA_DIR` overrides the platform data dir; tests point
/// it at a temp directory.
pub fn store_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("COURT_EXPLORER_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join("court-case-explorer"))
}
