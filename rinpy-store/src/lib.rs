//! RinPy Store
//!
//! A small key-value store abstraction with in-memory and file backends,
//! plus the panel layout persistence built on top of it.
//!
//! # Usage
//! ```rust,ignore
//! use rinpy_store::{load_layout, on_drag_end, MemoryStore};
//! use rinpy_config::Direction;
//!
//! let store = MemoryStore::new();
//! let layout = load_layout(&store);
//! on_drag_end(&store, Direction::Vertical, &[60.0, 40.0]).unwrap();
//! ```

mod error;
mod file;
mod layout;
mod memory;
mod r#trait;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use layout::{
    load_layout, load_sizes, on_drag_end, reset_layout, save_sizes, Layout, PanelSizes,
};
pub use memory::MemoryStore;
pub use r#trait::KeyValueStore;

/// Create a new in-memory store.
pub fn memory_store() -> MemoryStore {
    MemoryStore::new()
}

/// Create a store backed by a JSON file.
pub fn file_store(path: impl Into<std::path::PathBuf>) -> FileStore {
    FileStore::new(path)
}
