//! Explicit view state for a catalog front end.

use crate::Catalog;
use linkdeck_types::{CategoryFilter, Entry, EntryId};

/// What the user is currently looking at.
///
/// Front ends keep one of these next to the [`Catalog`] and derive the visible
/// list from both on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selector: CategoryFilter,
    pub query: String,
    editing: Option<EntryId>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_selector(mut self, selector: CategoryFilter) -> Self {
        self.selector = selector;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Back to every category and an empty query.
    pub fn reset(&mut self) {
        self.selector = CategoryFilter::All;
        self.query.clear();
    }

    /// Entries of `catalog` visible in this view.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Entry> {
        catalog.filter(self.selector, &self.query)
    }

    /// Marks an entry as being edited and returns a copy to edit.
    /// Returns `None` (and leaves the state alone) for an unknown id.
    pub fn begin_edit(&mut self, catalog: &Catalog, id: &EntryId) -> Option<Entry> {
        let entry = catalog.get(id)?.clone();
        self.editing = Some(id.clone());
        Some(entry)
    }

    #[must_use]
    pub fn editing(&self) -> Option<&EntryId> {
        self.editing.as_ref()
    }

    /// Clears the edit target, returning it.
    pub fn finish_edit(&mut self) -> Option<EntryId> {
        self.editing.take()
    }
}
