//! Entry identifiers.
//!
//! An identifier is tagged with its provenance. On the wire (local store,
//! export output, command line) it is a single string: user-added keys carry
//! the [`USER_PREFIX`], anything else is a built-in key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix marking a user-added identifier in its string form.
pub const USER_PREFIX: &str = "custom-";

/// Identifier of a catalog entry.
///
/// Only `UserAdded` entries may be deleted or edited in place. Editing a
/// `BuiltIn` entry produces a `UserAdded` override with the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryId {
    /// Shipped with the bundled catalog; key is the full identifier.
    BuiltIn(String),
    /// Created on this machine; key is the identifier without the prefix.
    UserAdded(String),
}

impl EntryId {
    /// Creates a fresh user-added identifier.
    /// The key is a UUID v7, so generated ids sort by creation time.
    #[must_use]
    pub fn generate() -> Self {
        Self::UserAdded(Uuid::now_v7().simple().to_string())
    }

    /// Parses an identifier from its string form. Never fails: any string
    /// without the user prefix is a built-in key.
    pub fn parse(s: &str) -> Self {
        match s.strip_prefix(USER_PREFIX) {
            Some(key) => Self::UserAdded(key.to_string()),
            None => Self::BuiltIn(s.to_string()),
        }
    }

    /// Returns true for identifiers created on this machine.
    #[must_use]
    pub const fn is_user_added(&self) -> bool {
        matches!(self, Self::UserAdded(_))
    }

    /// Returns true for identifiers from the bundled catalog.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::BuiltIn(_))
    }

    /// The key without any provenance marker.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::BuiltIn(key) | Self::UserAdded(key) => key,
        }
    }

    /// The user-added identifier that overrides this one.
    ///
    /// For `BuiltIn("7")` this is `UserAdded("7")` (`custom-7`). A user-added
    /// id is its own override.
    #[must_use]
    pub fn override_id(&self) -> Self {
        Self::UserAdded(self.key().to_string())
    }

    /// The identifier with its provenance stripped, as written by export.
    #[must_use]
    pub fn to_plain(&self) -> Self {
        Self::BuiltIn(self.key().to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn(key) => write!(f, "{key}"),
            Self::UserAdded(key) => write!(f, "{USER_PREFIX}{key}"),
        }
    }
}

impl FromStr for EntryId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.to_string()
    }
}
