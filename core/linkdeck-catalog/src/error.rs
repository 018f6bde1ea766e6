//! Catalog error types.

use linkdeck_store::StorageError;
use linkdeck_types::EntryId;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Built-in entries cannot be deleted.
    #[error("protected entry: {0} belongs to the built-in catalog")]
    ProtectedEntry(EntryId),

    #[error("entry not found: {0}")]
    NotFound(EntryId),

    /// Mutation input failed validation; nothing was written.
    #[error("invalid entry: {0}")]
    Invalid(#[from] linkdeck_types::Error),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The stored slot is not a JSON array; mutations refuse to replace it.
    #[error("stored entries are unreadable, refusing to overwrite them: {0}")]
    CorruptStore(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("invalid built-in catalog: {0}")]
    BuiltinCatalog(String),
}

impl CatalogError {
    /// Returns true if this error is a refused delete of a built-in entry.
    pub fn is_protected(&self) -> bool {
        matches!(self, CatalogError::ProtectedEntry(_))
    }
}
