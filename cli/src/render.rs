//! Plain-text rendering of entries.

use linkdeck_types::Entry;
use std::fmt::Write;

/// Renders one entry as a block of lines, ending in a newline.
#[must_use]
pub fn entry_block(entry: &Entry) -> String {
    let mut out = String::new();
    let star = if entry.is_featured() { " ★" } else { "" };
    let _ = writeln!(
        out,
        "{} {} [{}]{}",
        entry.icon,
        entry.title,
        entry.category.label(),
        star
    );
    let _ = writeln!(out, "    id:  {}", entry.id);
    let _ = writeln!(out, "    url: {}", entry.url);
    let _ = writeln!(out, "    {}", entry.display_description());
    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{t}")).collect();
        let _ = writeln!(out, "    {}", tags.join(" "));
    }
    out
}

/// Renders a list of entries separated by blank lines.
#[must_use]
pub fn entry_list(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No matching entries.\n".to_string();
    }
    entries
        .iter()
        .map(|e| entry_block(e))
        .collect::<Vec<_>>()
        .join("\n")
}
