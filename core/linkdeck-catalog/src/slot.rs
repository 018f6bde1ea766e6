//! The stored entry list as seen by mutations.
//!
//! Reads for display go through the lenient reconciler. Writes go through
//! [`StoredSlot`] instead: items this build cannot read are carried along
//! verbatim, and a payload that is not an array is never overwritten.

use crate::error::{CatalogError, CatalogResult};
use linkdeck_types::{Entry, EntryId};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum StoredItem {
    Entry(Entry),
    Unreadable(Value),
}

/// Every item of the stored array, in stored order.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoredSlot {
    items: Vec<StoredItem>,
}

impl StoredSlot {
    /// Parses a payload for a read-modify-write cycle.
    ///
    /// A missing payload is an empty slot. Anything other than a JSON array
    /// is [`CatalogError::CorruptStore`].
    pub(crate) fn parse(payload: Option<&str>) -> CatalogResult<Self> {
        let Some(payload) = payload else {
            return Ok(Self::default());
        };

        let items = match serde_json::from_str::<Value>(payload) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                return Err(CatalogError::CorruptStore(
                    "payload is not a JSON array".to_string(),
                ));
            }
            Err(e) => return Err(CatalogError::CorruptStore(e.to_string())),
        };

        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match serde_json::from_value::<Entry>(item.clone()) {
                Ok(entry) => StoredItem::Entry(entry),
                Err(e) => {
                    warn!("Keeping unreadable stored item at index {} as is: {}", index, e);
                    StoredItem::Unreadable(item)
                }
            })
            .collect();
        Ok(Self { items })
    }

    /// The readable entries, in stored order.
    pub(crate) fn entries(&self) -> Vec<Entry> {
        self.items
            .iter()
            .filter_map(|item| match item {
                StoredItem::Entry(entry) => Some(entry.clone()),
                StoredItem::Unreadable(_) => None,
            })
            .collect()
    }

    pub(crate) fn find_mut(&mut self, id: &EntryId) -> Option<&mut Entry> {
        self.items.iter_mut().find_map(|item| match item {
            StoredItem::Entry(entry) if &entry.id == id => Some(entry),
            _ => None,
        })
    }

    pub(crate) fn prepend(&mut self, entry: Entry) {
        self.items.insert(0, StoredItem::Entry(entry));
    }

    /// Removes the readable entries with `id`. Returns true if any was found.
    pub(crate) fn remove(&mut self, id: &EntryId) -> bool {
        let before = self.items.len();
        self.items
            .retain(|item| !matches!(item, StoredItem::Entry(entry) if &entry.id == id));
        self.items.len() != before
    }

    /// The slot as one compact JSON array.
    pub(crate) fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string(&self.items)?)
    }
}
