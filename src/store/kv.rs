//! String key-value persistence.
//!
//! The favorites/recents/theme collections live in an external key-value
//! store. [`FileStore`] keeps one file per key under the platform data
//! directory with atomic temp-file + rename writes; [`MemoryStore`] backs
//! tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Minimal string key-value interface over the persistent store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-per-key store rooted at a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the platform data dir (e.g. `~/.local/share/...`).
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(crate::utils::store_dir()?))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys like `@case_status_favorites` need to be filename-safe.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store key {key}"))?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).context("Failed to create store directory")?;

        // Atomic write: temp file + rename.
        let path = self.path_for(key);
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, value).with_context(|| format!("Failed to write store key {key}"))?;
        fs::rename(&temp, &path).with_context(|| format!("Failed to commit store key {key}"))?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().expect("store lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
