//! File-backed store implementation

use crate::error::{StoreError, StoreResult};
use crate::KeyValueStore;
use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

const TARGET: &str = "rinpy::layout";

/// A store kept in one JSON object file.
///
/// Every operation reads the whole file, and writes replace it atomically
/// (temp file in the same directory, then rename). A missing file is an
/// empty store; parent directories are created on first write. A write over
/// a corrupt file moves it aside to `<name>.bak` and starts from empty.
///
/// ```json
/// { "hor_sizes": "[25,75]", "ver_sizes": "[75,25]" }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. Nothing is read until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry
    pub fn entries(&self) -> StoreResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Where a corrupt file is moved before it gets replaced
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Entries to modify; a corrupt file is set aside and treated as empty.
    /// The flag is true when that happened.
    fn entries_for_write(&self) -> StoreResult<(BTreeMap<String, String>, bool)> {
        match self.entries() {
            Err(StoreError::Corrupt { path, message }) => {
                let backup = self.backup_path();
                match std::fs::rename(&self.path, &backup) {
                    Ok(()) => warn!(
                        target: TARGET,
                        path = %path,
                        backup = %backup.display(),
                        reason = %message,
                        "Corrupt store moved aside, starting empty"
                    ),
                    Err(e) => warn!(
                        target: TARGET,
                        path = %path,
                        reason = %message,
                        error = %e,
                        "Corrupt store could not be moved aside, overwriting"
                    ),
                }
                Ok((BTreeMap::new(), true))
            }
            other => other.map(|entries| (entries, false)),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(&self.path).map_err(|e| StoreError::from(e.error))?;
        trace!(target: TARGET, path = %self.path.display(), keys = entries.len(), "Store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let (mut entries, recovered) = self.entries_for_write()?;
        if entries.remove(key).is_some() || recovered {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
