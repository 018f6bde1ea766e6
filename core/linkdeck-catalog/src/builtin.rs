//! The built-in catalog shipped with the binary.

use crate::error::{CatalogError, CatalogResult};
use linkdeck_types::{Entry, EntryId};
use std::collections::HashSet;
use tracing::warn;

const BUNDLED: &str = include_str!("../builtin/resources.json");

/// The raw JSON of the bundled catalog.
#[must_use]
pub fn bundled_json() -> &'static str {
    BUNDLED
}

/// Parses the bundled catalog.
pub fn bundled() -> CatalogResult<Vec<Entry>> {
    parse_builtins(BUNDLED)
}

/// Parses a built-in catalog file.
///
/// The file must be a JSON array of entries whose ids carry no user prefix.
/// A repeated id keeps its first occurrence.
pub fn parse_builtins(json: &str) -> CatalogResult<Vec<Entry>> {
    let entries: Vec<Entry> =
        serde_json::from_str(json).map_err(|e| CatalogError::BuiltinCatalog(e.to_string()))?;

    if let Some(bad) = entries.iter().find(|e| e.id.is_user_added()) {
        return Err(CatalogError::BuiltinCatalog(format!(
            "entry {} carries the user prefix",
            bad.id
        )));
    }
    if let Some(bad) = entries.iter().find(|e| e.validate().is_err()) {
        return Err(CatalogError::BuiltinCatalog(format!(
            "entry {} has an empty title or url",
            bad.id
        )));
    }

    let mut seen: HashSet<EntryId> = HashSet::new();
    Ok(entries
        .into_iter()
        .filter(|e| {
            let first = seen.insert(e.id.clone());
            if !first {
                warn!("Built-in catalog repeats id {}, keeping the first", e.id);
            }
            first
        })
        .collect())
}
