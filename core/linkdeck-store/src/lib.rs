//! Local storage layer for linkdeck.
//!
//! Holds the user-added half of the catalog. The contract mirrors a browser
//! `localStorage` slot: one named key, one JSON array, always read and
//! written as a whole.
//!
//! # Architecture
//!
//! - [`KeyValueStore`] is the raw string slot abstraction
//! - [`FileStore`] keeps each slot in `<dir>/<key>.json`
//! - [`MemoryStore`] keeps slots in memory (tests, dry runs)
//! - [`ResourceStore`] binds a store to the entry slot and speaks `Entry`

mod error;
mod file;
mod memory;
mod resource;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use resource::{ResourceStore, DEFAULT_STORAGE_KEY};

/// A string-valued key-value store.
///
/// A missing key is `Ok(None)`, not an error. Writes replace the whole value.
pub trait KeyValueStore: Send + Sync {
    /// Returns a short name for logs.
    fn name(&self) -> &'static str;

    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
