//! Merging the built-in list with the locally stored entries.
//!
//! The working collection is built-ins first, then stored entries, each group
//! in its own order. Identifiers are unique: a built-in beats a stored entry
//! with the same id, and among stored entries the first (newest) wins.

use linkdeck_types::{Entry, EntryId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// What to do with a built-in entry that has a user override (`custom-<id>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowPolicy {
    /// Show the override and the original side by side.
    #[default]
    KeepBoth,
    /// Show only the override.
    HideOriginal,
}

/// Parses a stored payload into entries.
///
/// Missing, unparseable, or non-array payloads yield an empty list. Array
/// items that are not valid entries are skipped one by one.
pub fn parse_local(payload: Option<&str>) -> Vec<Entry> {
    let Some(payload) = payload else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(
                "Stored entries are not a JSON array (found {}), ignoring them",
                json_kind(&other)
            );
            return Vec::new();
        }
        Err(e) => {
            warn!("Stored entries are not valid JSON, ignoring them: {}", e);
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Entry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping malformed stored entry at index {}: {}", index, e);
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builds the working collection from built-ins and a raw stored payload.
pub fn reconcile(builtins: &[Entry], payload: Option<&str>, policy: ShadowPolicy) -> Vec<Entry> {
    merge(builtins, parse_local(payload), policy)
}

/// Builds the working collection from built-ins and parsed stored entries.
pub fn merge(builtins: &[Entry], local: Vec<Entry>, policy: ShadowPolicy) -> Vec<Entry> {
    let mut seen: HashSet<EntryId> = HashSet::with_capacity(builtins.len() + local.len());
    let builtins: Vec<&Entry> = builtins.iter().filter(|e| seen.insert(e.id.clone())).collect();

    let local: Vec<Entry> = local
        .into_iter()
        .filter(|e| {
            let fresh = seen.insert(e.id.clone());
            if !fresh {
                debug!("Dropping stored entry {}: id already taken", e.id);
            }
            fresh
        })
        .collect();

    let shadowed: HashSet<EntryId> = match policy {
        ShadowPolicy::KeepBoth => HashSet::new(),
        ShadowPolicy::HideOriginal => local
            .iter()
            .filter(|e| e.id.is_user_added())
            .map(|e| e.id.to_plain())
            .collect(),
    };

    builtins
        .into_iter()
        .filter(|e| !shadowed.contains(&e.id))
        .cloned()
        .chain(local)
        .collect()
}
