//! Catalog engine for linkdeck.
//!
//! Turns the bundled built-in list and the locally stored user entries into
//! one working collection, and implements everything done to it:
//! - [`reconcile`]: merge built-ins with a raw stored payload, never failing
//! - [`Catalog`]: add, edit (copy-on-write for built-ins), delete
//! - [`filter_entries`] / [`ViewState`]: category + search view
//! - [`export`]: the collection as a static list, ready to commit
//!
//! Built-in entries are immutable. All writes go to the user's slot in a
//! [`linkdeck_store::ResourceStore`].

mod builtin;
mod catalog;
mod error;
mod export;
mod filter;
mod reconcile;
mod slot;
mod view;

pub use builtin::{bundled, bundled_json, parse_builtins};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use export::{export, project, ExportFormat};
pub use filter::filter_entries;
pub use reconcile::{merge, parse_local, reconcile, ShadowPolicy};
pub use view::ViewState;
