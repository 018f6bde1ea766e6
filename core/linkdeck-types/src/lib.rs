//! Core type definitions for linkdeck.
//!
//! This crate defines the types shared by every layer of the catalog:
//! - Entry identifiers, tagged by provenance (built-in vs user-added)
//! - The fixed category set and the "all or one" category selector
//! - Catalog entries and the draft form used to create them
//!
//! Nothing here touches storage or the network.

mod category;
mod entry;
mod ids;

pub use category::{Category, CategoryFilter};
pub use entry::{parse_tags, Entry, EntryDraft, DEFAULT_ICON, DESCRIPTION_PLACEHOLDER};
pub use ids::{EntryId, USER_PREFIX};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl Error {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
