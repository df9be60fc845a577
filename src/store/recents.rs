use serde_json;
use tracing::warn;

use super::kv::KeyValueStore;

/// Storage key for the recents array.
pub const RECENTS_KEY: &str = "@recent_services";

/// Upper bound on remembered services.
pub const MAX_RECENTS: usize = 4;

/// Bounded list of recently opened services, newest first.
///
/// Re-recording an existing name moves it to the front without changing the
/// list length; the list never exceeds [`MAX_RECENTS`] entries and never
/// holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentsList {
    names: Vec<String>,
}

impl RecentsList {
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Best-effort load; failures log and default to empty.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(RECENTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut names) => {
                    names.truncate(MAX_RECENTS);
                    Self { names }
                }
                Err(err) => {
                    warn!(%err, "recents payload is not a JSON string array");
                    Self::empty()
                }
            },
            Ok(None) => Self::empty(),
            Err(err) => {
                warn!(%err, "failed to load recents");
                Self::empty()
            }
        }
    }

    /// Record a visit, moving the name to the front and trimming the tail.
    pub fn record(&mut self, store: &dyn KeyValueStore, name: &str) {
        self.names.retain(|n| n != name);
        self.names.insert(0, name.to_string());
        self.names.truncate(MAX_RECENTS);
        self.save(store);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn save(&self, store: &dyn KeyValueStore) {
        let json = match serde_json::to_string(&self.names) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize recents");
                return;
            }
        };
        if let Err(err) = store.set(RECENTS_KEY, &json) {
            warn!(%err, "failed to save recents");
        }
    }
}
