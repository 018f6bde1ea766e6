//! The filter view: category selector plus free-text search.

use linkdeck_types::{CategoryFilter, Entry};

/// Returns the entries visible under `selector` and `query`, in order.
///
/// An entry matches the query when the query, ignoring case, is a substring
/// of its title, its description, or one of its tags. An empty query matches
/// everything.
pub fn filter_entries<'a>(
    entries: &'a [Entry],
    selector: CategoryFilter,
    query: &str,
) -> Vec<&'a Entry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| selector.admits(e.category) && matches_query(e, &needle))
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_query(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(entry.title.as_str())
        || contains(entry.description.as_str())
        || entry.tags.iter().any(|t| contains(t.as_str()))
}
