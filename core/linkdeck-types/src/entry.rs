//! Catalog entries.

use crate::{Category, EntryId, Error, Result};
use serde::{Deserialize, Serialize};

/// Icon given to new entries when none is chosen.
pub const DEFAULT_ICON: &str = "🔗";

/// Text rendered in place of an empty description.
pub const DESCRIPTION_PLACEHOLDER: &str = "暂无详细描述";

/// A single link in the catalog.
///
/// The JSON form matches the bundled catalog file and the local store slot.
/// `featured` keeps its absence so stored entries round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub category: Category,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Entry {
    /// Builds an entry from a draft and an identifier.
    #[must_use]
    pub fn from_draft(id: EntryId, draft: EntryDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            url: draft.url,
            category: draft.category,
            icon: draft.icon,
            tags: draft.tags,
            featured: draft.featured,
        }
    }

    /// The editable fields of this entry, without its identifier.
    #[must_use]
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            category: self.category,
            icon: self.icon.clone(),
            tags: self.tags.clone(),
            featured: self.featured,
        }
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Description for display, falling back to the placeholder.
    #[must_use]
    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            DESCRIPTION_PLACEHOLDER
        } else {
            &self.description
        }
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)?;
        require_non_empty("url", &self.url)
    }
}

/// A candidate entry that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl EntryDraft {
    /// Creates a draft with the required fields; everything else defaulted.
    pub fn new(title: impl Into<String>, url: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: String::new(),
            category,
            icon: default_icon(),
            tags: Vec::new(),
            featured: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Rejects a draft whose title or url is blank.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)?;
        require_non_empty("url", &self.url)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Splits a raw tag string on ASCII and full-width commas.
///
/// Each tag is trimmed and empty tags are dropped; order is kept.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split([',', '，']))
}

fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
