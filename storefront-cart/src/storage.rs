//! Key-value storage backends
//!
//! Mirrors browser local storage: string keys, string values, whole-value writes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// String key-value storage
pub trait KeyValueStorage {
    /// Read failures are reported as `Err` and swallowed by the store
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// JSON object file, one string entry per key
///
/// The file is read once on open and rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    file_path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStorage {
    /// Open the file; a missing file starts empty
    ///
    /// An unreadable or malformed file also starts empty and is overwritten
    /// on the next write.
    pub fn open(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let items = match std::fs::read_to_string(&file_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %file_path.display(), error = %e, "Storage file is corrupt, starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %file_path.display(), error = %e, "Storage file unreadable, starting empty");
                BTreeMap::new()
            }
        };
        Self { file_path, items }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn save(&self) -> StoreResult<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.file_path, content).map_err(StoreError::from)
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        if self.items.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
