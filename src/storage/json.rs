//! JSON file-based preference storage.
//!
//! Persists preference slots in a small human-readable JSON document. Every
//! write goes to a temporary sibling file first and is then renamed over the
//! target, so a crash never leaves a half-written document behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "theme": "dark"
//!   }
//! }
//! ```

use crate::domain::error::{DwijabakeError, Result};
use crate::storage::backend::PreferenceStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The whole document is held in memory and rewritten on every change.
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
    /// Set when in-memory data has not reached disk yet.
    dirty: bool,
}

impl JsonStorage {
    /// Opens the storage file, creating parent directories as needed.
    ///
    /// A missing file yields empty storage; the file is only created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or if the
    /// file exists but cannot be read or does not contain valid JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dwijabake::storage::JsonStorage;
    ///
    /// let storage = JsonStorage::new("/tmp/dwijabake/preferences.json")?;
    /// # Ok::<(), dwijabake::DwijabakeError>(())
    /// ```
    pub fn new(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening preference storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            StorageData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| DwijabakeError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded preference data"
        );

        Ok(data)
    }

    /// Writes the document to disk via temp file + rename.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DwijabakeError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStorage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, value = %value).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) && self.file_path.exists() {
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty preferences on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        {
            let mut storage = JsonStorage::new(&path).unwrap();
            assert_eq!(storage.get("theme").unwrap(), None);
            storage.set("theme", "dark").unwrap();
        }

        let reopened = JsonStorage::new(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStorage::new(&path).err().unwrap();
        assert!(matches!(err, DwijabakeError::Storage(_)));
    }
}
