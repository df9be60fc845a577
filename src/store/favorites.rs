use serde_json;
use tracing::warn;

use super::kv::KeyValueStore;

/// Storage key for the favorites array.
pub const FAVORITES_KEY: &str = "@case_status_favorites";

/// Ordered set of favorited service names, most recently toggled first.
///
/// The in-memory list is the source of truth for the session; persistence
/// is best-effort on load and fire-and-forget on save. No duplicates:
/// toggling an existing favorite removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesSet {
    names: Vec<String>,
}

impl FavoritesSet {
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Load from the store; any failure logs a warning and yields the empty
    /// set so rendering is never blocked.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(names) => Self { names },
                Err(err) => {
                    warn!(%err, "favorites payload is not a JSON string array");
                    Self::empty()
                }
            },
            Ok(None) => Self::empty(),
            Err(err) => {
                warn!(%err, "failed to load favorites");
                Self::empty()
            }
        }
    }

    /// Toggle a name: absent → inserted at the front, present → removed.
    /// Returns true when the name is a favorite afterwards. The save is
    /// fire-and-forget; a persistence failure is logged and the in-memory
    /// state stands.
    pub fn toggle(&mut self, store: &dyn KeyValueStore, name: &str) -> bool {
        let was_favorite = self.names.iter().any(|n| n == name);
        self.names.retain(|n| n != name);
        if !was_favorite {
            self.names.insert(0, name.to_string());
        }
        self.save(store);
        !was_favorite
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn save(&self, store: &dyn KeyValueStore) {
        let json = match serde_json::to_string(&self.names) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize favorites");
                return;
            }
        };
        // Full-array replace; writes are serialized by the event loop.
        if let Err(err) = store.set(FAVORITES_KEY, &json) {
            warn!(%err, "failed to save favorites");
        }
    }
}
