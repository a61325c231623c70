//! KeyValueStore trait definition

use crate::error::StoreResult;

/// String key-value store
///
/// The browser's `localStorage` analogue: flat string keys mapping to
/// string values. Callers encode structured values themselves.
///
/// # Implementations
/// - `MemoryStore`: in-memory map
/// - `FileStore`: one JSON object file on disk
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a value; removing an absent key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Check if a key is present
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}
