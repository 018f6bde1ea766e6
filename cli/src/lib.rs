//! Command-line front end for the linkdeck catalog.
//!
//! Parsing lives in [`Cli`]; [`execute`] runs one [`Command`] against a
//! resolved [`AppConfig`] and writes its output to any writer.

mod config;
mod render;

pub use config::{AppConfig, API_KEY_VARS, DEFAULT_CONFIG_FILE};
pub use render::{entry_block, entry_list};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use linkdeck_ai::{Assistant, GeminiClient};
use linkdeck_catalog::{bundled, parse_builtins, project, Catalog, ExportFormat, ViewState};
use linkdeck_store::{FileStore, ResourceStore};
use linkdeck_types::{parse_tags, Category, CategoryFilter, Entry, EntryDraft, EntryId};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Message shown when a built-in entry is targeted by `delete`.
pub const PROTECTED_MESSAGE: &str = "默认资源不可删除";

#[derive(Parser, Debug)]
#[command(name = "linkdeck", version)]
#[command(about = "Curated link directory with local additions")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the local store
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Built-in catalog file to use instead of the bundled one
    #[arg(long, global = true)]
    pub builtins: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads the configuration and applies the command-line overrides.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(path) = &self.builtins {
            config.builtins = Some(path.clone());
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List entries, optionally filtered
    List {
        /// Category name, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive search over title, description and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry
    Show { id: EntryId },

    /// Add a new entry
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        url: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(short, long, default_value = "AI")]
        category: Category,

        #[arg(long)]
        icon: Option<String>,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        #[arg(long)]
        featured: bool,

        /// Ask the model for a description when none is given
        #[arg(long)]
        ai_describe: bool,
    },

    /// Edit an entry. Editing a built-in entry stores an override copy.
    Edit {
        id: EntryId,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(short, long)]
        category: Option<Category>,

        #[arg(long)]
        icon: Option<String>,

        /// Comma-separated tags; replaces the current list
        #[arg(long)]
        tags: Option<String>,

        #[arg(long, action = clap::ArgAction::Set)]
        featured: Option<bool>,
    },

    /// Delete a user-added entry
    Delete { id: EntryId },

    /// Export the visible catalog as a built-in catalog source
    Export {
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask the model for a short analysis of an entry
    Summarize { id: EntryId },

    /// Ask the model for a description of a link
    Describe {
        #[arg(long)]
        title: String,

        #[arg(long)]
        url: String,
    },

    /// List categories with entry counts
    Categories,
}

/// Opens the catalog described by `config`.
pub fn open_catalog(config: &AppConfig) -> Result<Catalog> {
    let builtins = match &config.builtins {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read built-in catalog {}", path.display()))?;
            parse_builtins(&raw)
                .with_context(|| format!("Invalid built-in catalog {}", path.display()))?
        }
        None => bundled().context("Bundled catalog is invalid")?,
    };
    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
    let store = ResourceStore::with_key(store, config.storage_key.clone());
    Ok(Catalog::open_with_policy(builtins, store, config.shadow_policy))
}

fn assistant(config: &AppConfig) -> Result<Assistant<GeminiClient>> {
    let client = GeminiClient::new(config.ai.clone()).context("Failed to create AI client")?;
    Ok(Assistant::new(client))
}

fn lookup<'a>(catalog: &'a Catalog, id: &EntryId) -> Result<&'a Entry> {
    catalog
        .get(id)
        .ok_or_else(|| anyhow!("No entry with id {id}"))
}

/// Runs `command`, writing user-facing output to `out`.
pub async fn execute<W: Write>(command: Command, config: &AppConfig, out: &mut W) -> Result<()> {
    let mut catalog = open_catalog(config)?;

    match command {
        Command::List {
            category,
            query,
            json,
        } => {
            let view = ViewState::new().with_selector(category).with_query(query);
            let visible = view.visible(&catalog);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
            } else {
                write!(out, "{}", entry_list(&visible))?;
            }
        }

        Command::Show { id } => {
            write!(out, "{}", entry_block(lookup(&catalog, &id)?))?;
        }

        Command::Add {
            title,
            url,
            description,
            category,
            icon,
            tags,
            featured,
            ai_describe,
        } => {
            let mut draft = EntryDraft::new(title, url, category);
            draft.validate()?;

            let description = match description.filter(|d| !d.trim().is_empty()) {
                Some(d) => d,
                None if ai_describe => {
                    assistant(config)?
                        .describe(&draft.title, &draft.url)
                        .await
                }
                None => String::new(),
            };
            draft = draft.with_description(description);
            if let Some(icon) = icon.filter(|i| !i.trim().is_empty()) {
                draft = draft.with_icon(icon);
            }
            if let Some(raw) = tags {
                draft = draft.with_tags(parse_tags(&raw));
            }
            if featured {
                draft = draft.with_featured(true);
            }

            let entry = catalog.add(draft)?;
            info!("Added {}", entry.id);
            write!(out, "{}", entry_block(&entry))?;
        }

        Command::Edit {
            id,
            title,
            url,
            description,
            category,
            icon,
            tags,
            featured,
        } => {
            let mut view = ViewState::new();
            let mut entry = view
                .begin_edit(&catalog, &id)
                .ok_or_else(|| anyhow!("No entry with id {id}"))?;
            if let Some(title) = title {
                entry.title = title;
            }
            if let Some(url) = url {
                entry.url = url;
            }
            if let Some(description) = description {
                entry.description = description;
            }
            if let Some(category) = category {
                entry.category = category;
            }
            if let Some(icon) = icon {
                entry.icon = icon;
            }
            if let Some(raw) = tags {
                entry.tags = parse_tags(&raw);
            }
            if let Some(featured) = featured {
                entry.featured = Some(featured);
            }

            let saved = catalog.edit(entry)?;
            view.finish_edit();
            write!(out, "{}", entry_block(&saved))?;
        }

        Command::Delete { id } => match catalog.delete(&id) {
            Ok(true) => writeln!(out, "Deleted {id}")?,
            Ok(false) => writeln!(out, "Nothing to delete: {id} is not stored")?,
            Err(e) if e.is_protected() => {
                warn!("Refused to delete built-in entry {}", id);
                bail!(PROTECTED_MESSAGE);
            }
            Err(e) => return Err(e.into()),
        },

        Command::Export { format, output } => {
            let text = catalog.export(format)?;
            let count = project(catalog.entries()).len();
            match output {
                Some(path) => {
                    fs::write(&path, &text)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Exported {} entries to {}", count, path.display());
                    writeln!(out, "Exported {} entries to {}", count, path.display())?;
                }
                None => write!(out, "{text}")?,
            }
        }

        Command::Summarize { id } => {
            let entry = lookup(&catalog, &id)?;
            let summary = assistant(config)?
                .summarize(&entry.title, &entry.description)
                .await;
            writeln!(out, "{summary}")?;
        }

        Command::Describe { title, url } => {
            let description = assistant(config)?.describe(&title, &url).await;
            writeln!(out, "{description}")?;
        }

        Command::Categories => {
            for category in Category::ALL {
                let count = catalog.filter(category.into(), "").len();
                writeln!(
                    out,
                    "{} {:<7} {} ({})",
                    category.icon(),
                    category.as_str(),
                    category.label(),
                    count
                )?;
            }
        }
    }

    Ok(())
}
