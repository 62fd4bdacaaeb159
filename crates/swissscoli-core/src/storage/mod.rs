mod config;
pub mod database;

pub use config::{Config, TimerConfig, TrackerConfig, UiConfig};
pub use database::Database;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::StorageError;

/// Synchronous string key-value store.
///
/// Values are opaque serialized blobs; callers own the encoding.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove every key.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// In-process store. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        Ok(())
    }
}

/// Returns the data directory, creating it if needed.
///
/// `SWISSSCOLI_DATA_DIR` overrides the location entirely. Otherwise the
/// directory is `~/.config/swissscoli[-dev]/`, with the `-dev` suffix
/// selected by `SWISSSCOLI_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("SWISSSCOLI_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("SWISSSCOLI_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("swissscoli-dev")
            } else {
                base_dir.join("swissscoli")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_clear() {
        let mut store = MemoryStore::new();
        assert!(store.get("streak").unwrap().is_none());

        store.set("streak", "3").unwrap();
        store.set("streak", "4").unwrap();
        assert_eq!(store.get("streak").unwrap().as_deref(), Some("4"));
        assert_eq!(store.len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
