use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::StoreError;

use super::StorageBackend;

/// Single-file backend: every key lives in one JSON object document.
///
/// The document is loaded once on open and rewritten in full on every write.
/// A missing or unreadable file starts the store empty rather than failing;
/// only writes surface errors.
pub struct FileBackend {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl FileBackend {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    warn!(path = %path.display(), %err, "store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        FileBackend { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|value| value.to_string())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let parsed: Value = serde_json::from_str(value)?;
        self.values.insert(key.to_string(), parsed);
        self.persist()
    }
}
