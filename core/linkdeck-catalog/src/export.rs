//! Export of the working collection as a static catalog.
//!
//! The output is what gets committed as the new built-in list. User prefixes
//! are stripped and overrides replace the built-ins they shadow.

use crate::error::{CatalogError, CatalogResult};
use linkdeck_types::{Entry, EntryId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Pretty JSON array, the format of the bundled catalog file.
    #[default]
    Json,
    /// A TypeScript module declaring `RESOURCES`.
    Module,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Module => f.write_str("module"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "module" | "ts" => Ok(Self::Module),
            _ => Err(CatalogError::UnknownFormat(s.to_string())),
        }
    }
}

/// Entries as they appear in an export.
///
/// Prefixes are stripped. A user override (`custom-<id>`) takes the place of
/// the built-in `<id>` it shadows, so every exported id is unique and the
/// edited copy is the one that survives a re-import.
#[must_use]
pub fn project(entries: &[Entry]) -> Vec<Entry> {
    let plain_ids: HashSet<&EntryId> = entries
        .iter()
        .filter(|e| e.id.is_builtin())
        .map(|e| &e.id)
        .collect();
    let overrides: HashMap<EntryId, &Entry> = entries
        .iter()
        .filter(|e| e.id.is_user_added())
        .map(|e| (e.id.to_plain(), e))
        .collect();

    entries
        .iter()
        .filter_map(|e| {
            let plain = e.id.to_plain();
            let source = if e.id.is_builtin() {
                overrides.get(&plain).copied().unwrap_or(e)
            } else if plain_ids.contains(&plain) {
                return None;
            } else {
                e
            };
            Some(Entry {
                id: plain,
                featured: Some(source.is_featured()),
                ..source.clone()
            })
        })
        .collect()
}

/// Renders `entries` in `format`.
pub fn export(entries: &[Entry], format: ExportFormat) -> CatalogResult<String> {
    let json = serde_json::to_string_pretty(&project(entries))?;
    Ok(match format {
        ExportFormat::Json => format!("{json}\n"),
        ExportFormat::Module => format!("export const RESOURCES: Resource[] = {json};\n"),
    })
}
