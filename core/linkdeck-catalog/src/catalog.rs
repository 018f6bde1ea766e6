//! The working collection and the operations that change it.

use crate::error::{CatalogError, CatalogResult};
use crate::export::{export, ExportFormat};
use crate::filter::filter_entries;
use crate::reconcile::{merge, parse_local, ShadowPolicy};
use crate::slot::StoredSlot;
use linkdeck_store::ResourceStore;
use linkdeck_types::{CategoryFilter, Entry, EntryDraft, EntryId};
use tracing::{debug, info, warn};

/// Built-in entries merged with the user's stored entries.
///
/// Every mutation writes the full stored list through to the store before the
/// working collection is rebuilt; a failed write leaves the catalog as it was.
/// Mutations read the store strictly: a read error or a slot that is not a
/// JSON array aborts them, and stored items they cannot parse are written
/// back unchanged.
#[derive(Debug)]
pub struct Catalog {
    builtins: Vec<Entry>,
    store: ResourceStore,
    policy: ShadowPolicy,
    entries: Vec<Entry>,
}

impl Catalog {
    /// Opens a catalog with the default shadow policy.
    pub fn open(builtins: Vec<Entry>, store: ResourceStore) -> Self {
        Self::open_with_policy(builtins, store, ShadowPolicy::default())
    }

    /// Opens a catalog, reading the store once.
    pub fn open_with_policy(
        builtins: Vec<Entry>,
        store: ResourceStore,
        policy: ShadowPolicy,
    ) -> Self {
        let mut catalog = Self {
            builtins,
            store,
            policy,
            entries: Vec::new(),
        };
        catalog.reload();
        info!(
            "Catalog opened: {} built-in, {} total entries",
            catalog.builtins.len(),
            catalog.entries.len()
        );
        catalog
    }

    /// Re-reads the store and rebuilds the working collection.
    pub fn reload(&mut self) {
        let local = self.local_entries();
        self.entries = merge(&self.builtins, local, self.policy);
    }

    /// The working collection, built-ins first.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn builtins(&self) -> &[Entry] {
        &self.builtins
    }

    #[must_use]
    pub fn policy(&self) -> ShadowPolicy {
        self.policy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry of the working collection.
    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// The stored entries, newest first. An unreadable store reads as empty.
    #[must_use]
    pub fn local_entries(&self) -> Vec<Entry> {
        match self.store.load_raw() {
            Ok(payload) => parse_local(payload.as_deref()),
            Err(e) => {
                warn!(
                    "Failed to read store slot {}, treating it as empty: {}",
                    self.store.key(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Adds a new user entry in front of the stored list.
    pub fn add(&mut self, draft: EntryDraft) -> CatalogResult<Entry> {
        draft.validate()?;

        let entry = Entry::from_draft(EntryId::generate(), draft);
        let mut slot = self.load_slot()?;
        slot.prepend(entry.clone());
        self.commit(&slot)?;

        info!("Added entry {} ({})", entry.id, entry.title);
        Ok(entry)
    }

    /// Saves an edited entry.
    ///
    /// A user entry is replaced where it stands. A built-in entry is never
    /// modified: the edit becomes a user entry with id `custom-<id>`, placed in
    /// front of the stored list (or replacing an earlier override).
    pub fn edit(&mut self, entry: Entry) -> CatalogResult<Entry> {
        entry.validate()?;
        let mut slot = self.load_slot()?;

        let saved = if entry.id.is_user_added() {
            let stored = slot
                .find_mut(&entry.id)
                .ok_or_else(|| CatalogError::NotFound(entry.id.clone()))?;
            *stored = entry;
            stored.clone()
        } else {
            let known = self.get(&entry.id).is_some()
                || self.builtins.iter().any(|b| b.id == entry.id);
            if !known {
                return Err(CatalogError::NotFound(entry.id));
            }
            let original = entry.id.clone();
            let overridden = Entry {
                id: original.override_id(),
                ..entry
            };
            match slot.find_mut(&overridden.id) {
                Some(stored) => *stored = overridden.clone(),
                None => slot.prepend(overridden.clone()),
            }
            debug!("Built-in entry {} overridden by {}", original, overridden.id);
            overridden
        };

        self.commit(&slot)?;
        info!("Edited entry {} ({})", saved.id, saved.title);
        Ok(saved)
    }

    /// Deletes a user entry.
    ///
    /// Returns `Ok(false)` when no stored entry has this id. Built-in ids are
    /// refused with [`CatalogError::ProtectedEntry`] before the store is read.
    pub fn delete(&mut self, id: &EntryId) -> CatalogResult<bool> {
        if id.is_builtin() {
            warn!("Refusing to delete built-in entry {}", id);
            return Err(CatalogError::ProtectedEntry(id.clone()));
        }

        let mut slot = self.load_slot()?;
        if !slot.remove(id) {
            debug!("Delete of {} is a no-op: not stored", id);
            return Ok(false);
        }

        self.commit(&slot)?;
        info!("Deleted entry {}", id);
        Ok(true)
    }

    /// Entries visible under a category selector and search query.
    #[must_use]
    pub fn filter(&self, selector: CategoryFilter, query: &str) -> Vec<&Entry> {
        filter_entries(&self.entries, selector, query)
    }

    /// Renders the working collection for committing as the built-in list.
    pub fn export(&self, format: ExportFormat) -> CatalogResult<String> {
        export(&self.entries, format)
    }

    fn load_slot(&self) -> CatalogResult<StoredSlot> {
        StoredSlot::parse(self.store.load_raw()?.as_deref())
    }

    fn commit(&mut self, slot: &StoredSlot) -> CatalogResult<()> {
        self.store.save_raw(&slot.to_json()?)?;
        self.entries = merge(&self.builtins, slot.entries(), self.policy);
        Ok(())
    }
}
