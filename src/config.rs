// src/config.rs

//! Defines the configuration for the `console` tool and the markup converter.
//!
//! Configuration is read once, from a JSON file named by the
//! `CONSOLE_MARKUP_CONFIG` environment variable. Every field has a default,
//! so a partial file (or no file at all) is valid.

use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the path of the configuration file.
pub const CONFIG_PATH_ENV: &str = "CONSOLE_MARKUP_CONFIG";

/// Process-wide configuration, loaded on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Settings for markup conversion and for the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Echo every token to stderr before it is resolved.
    pub diagnostics: bool,
    /// Print a doubled `<<`/`>>` as a single character.
    /// Off by default, so output only differs from input where tags resolved.
    pub unescape_delimiters: bool,
    /// Clear the screen and home the cursor before printing.
    pub clear_screen: bool,
    /// String placed between command-line arguments when joining them.
    pub separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            diagnostics: false,
            unescape_delimiters: false,
            clear_screen: false,
            separator: String::new(),
        }
    }
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Failed to parse configuration JSON")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// The configuration file named by `CONSOLE_MARKUP_CONFIG`, if set.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from)
    }

    /// Loads the configuration from the environment, falling back to the
    /// defaults when no file is named or the file cannot be used.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::path_from_env() else {
            return Config::default();
        };
        match Self::from_file(&path) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}. Using default configuration.", e);
                Config::default()
            }
        }
    }
}
