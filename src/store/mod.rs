//! Persistent favorites/recents/theme storage.
//!
//! A narrow adapter over a string key-value store: loads are best-effort at
//! startup (failure logged, defaults used, rendering never blocked), saves
//! are fire-and-forget full-array replaces after each user action. The
//! in-memory collections remain the source of truth for the session
//! regardless of persistence success.

pub mod favorites;
pub mod kv;
pub mod recents;
pub mod theme;

pub use favorites::{FAVORITES_KEY, FavoritesSet};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use recents::{MAX_RECENTS, RECENTS_KEY, RecentsList};
pub use theme::{THEME_KEY, load_theme_mode, save_theme_mode};
