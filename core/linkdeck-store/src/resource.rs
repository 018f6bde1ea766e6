//! The user-added entry slot.

use crate::error::StorageResult;
use crate::KeyValueStore;
use linkdeck_types::Entry;
use tracing::debug;

/// Slot key holding the user-added entries.
pub const DEFAULT_STORAGE_KEY: &str = "user_added_resources";

/// Persistence of the user-added entry list.
///
/// Reads hand back the raw payload untouched: deciding what a corrupt slot
/// means is the reconciler's job, not the store's.
pub struct ResourceStore {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl ResourceStore {
    /// Binds `store` to the default slot.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Binds `store` to a custom slot.
    pub fn with_key(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw slot payload, if any.
    pub fn load_raw(&self) -> StorageResult<Option<String>> {
        self.store.get(&self.key)
    }

    /// Replaces the slot with `entries`, serialized as one JSON array.
    pub fn save(&self, entries: &[Entry]) -> StorageResult<()> {
        let payload = serde_json::to_string(entries)?;
        self.store.set(&self.key, &payload)?;
        debug!(
            "Saved {} user entries to {} store slot {}",
            entries.len(),
            self.store.name(),
            self.key
        );
        Ok(())
    }

    /// Replaces the slot with an already serialized payload.
    pub fn save_raw(&self, payload: &str) -> StorageResult<()> {
        self.store.set(&self.key, payload)?;
        debug!(
            "Saved {} bytes to {} store slot {}",
            payload.len(),
            self.store.name(),
            self.key
        );
        Ok(())
    }

    /// Empties the slot.
    pub fn clear(&self) -> StorageResult<()> {
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("store", &self.store.name())
            .field("key", &self.key)
            .finish()
    }
}
