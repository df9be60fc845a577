use tracing::warn;

use super::kv::KeyValueStore;
use crate::models::ThemeMode;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "user-theme-mode";

/// Load the persisted theme mode; missing or unreadable values fall back to
/// `System` without blocking startup.
pub fn load_theme_mode(store: &dyn KeyValueStore) -> ThemeMode {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => ThemeMode::from_str_lossy(raw.trim()),
        Ok(None) => ThemeMode::default(),
        Err(err) => {
            warn!(%err, "failed to load theme preference");
            ThemeMode::default()
        }
    }
}

/// Persist the theme mode, fire-and-forget.
pub fn save_theme_mode(store: &dyn KeyValueStore, mode: ThemeMode) {
    if let Err(err) = store.set(THEME_KEY, mode.as_str()) {
        warn!(%err, "failed to save theme preference");
    }
}
