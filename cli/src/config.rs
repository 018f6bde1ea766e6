//! Application configuration.

use anyhow::{Context, Result};
use linkdeck_ai::GeminiConfig;
use linkdeck_catalog::ShadowPolicy;
use linkdeck_store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "linkdeck.json";

/// Environment variables checked for the Gemini key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the local store.
    pub data_dir: PathBuf,
    /// Store slot holding the user's entries.
    pub storage_key: String,
    /// Built-in catalog file. `None` uses the bundled catalog.
    pub builtins: Option<PathBuf>,
    pub shadow_policy: ShadowPolicy,
    pub ai: GeminiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".linkdeck"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            builtins: None,
            shadow_policy: ShadowPolicy::default(),
            ai: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Loads the configuration from `explicit`, else from
    /// [`DEFAULT_CONFIG_FILE`] if present, else defaults, then applies the
    /// process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Takes the API key from the first non-empty variable in [`API_KEY_VARS`].
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in API_KEY_VARS {
            if let Some(key) = lookup(name).filter(|k| !k.trim().is_empty()) {
                debug!("Using API key from {}", name);
                self.ai.api_key = Some(key);
                return;
            }
        }
    }
}
