use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{KeyValueStore, StoreError};

/// Storage file name in the storage directory
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
    pub stored_at: DateTime<Utc>,
}

impl StoredValue {
    pub fn new(value: String) -> Self {
        Self {
            value,
            stored_at: Utc::now(),
        }
    }
}

/// File-backed key-value store.
///
/// All keys live in a single JSON object. A write replaces the file through a
/// temp file and rename, so readers never observe a half-written value.
pub struct FileStore {
    storage_dir: PathBuf,
}

impl FileStore {
    pub fn new(storage_dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&storage_dir).map_err(|source| StoreError::Write {
            path: storage_dir.clone(),
            source,
        })?;
        Ok(Self { storage_dir })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_dir.join(STORAGE_FILE)
    }

    /// Read a stored entry including its timestamp.
    pub fn entry(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        Ok(self.load_all()?.remove(key))
    }

    fn load_all(&self) -> Result<BTreeMap<String, StoredValue>, StoreError> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|source| StoreError::Read { path: path.clone(), source })?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, StoredValue>) -> Result<(), StoreError> {
        let path = self.storage_path();
        let tmp = temp_path(&path);
        let contents = serde_json::to_string_pretty(entries)?;

        std::fs::write(&tmp, contents)
            .map_err(|source| StoreError::Write { path: tmp.clone(), source })?;
        std::fs::rename(&tmp, &path)
            .map_err(|source| StoreError::Write { path: path.clone(), source })?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entry(key)?.map(|e| e.value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // An unreadable file is replaced rather than blocking the write
        let mut entries = match self.load_all() {
            Ok(entries) => entries,
            Err(StoreError::Json(e)) => {
                debug!(error = %e, "Replacing corrupt storage file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), StoredValue::new(value.to_string()));
        self.write_all(&entries)?;
        debug!(key, path = ?self.storage_path(), "Stored value");
        Ok(())
    }
}
