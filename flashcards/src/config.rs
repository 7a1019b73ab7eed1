// src/config.rs
pub mod loader;

use crate::cli::Args;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config};

/// Contents of a `.flashcards.toml` file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Deck file imported before the session starts.
    pub import_from: Option<PathBuf>,
    /// Deck file written when the session exits.
    pub export_to: Option<PathBuf>,
}

impl Config {
    /// Reads a config file. Relative paths inside it are resolved against the
    /// directory containing the file.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not valid TOML or contains unknown keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            import_from: config.import_from.map(|p| base.join(p)),
            export_to: config.export_to.map(|p| base.join(p)),
        })
    }
}

/// Effective settings for a run: command-line flags over the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub import_from: Option<PathBuf>,
    pub export_to: Option<PathBuf>,
}

impl Settings {
    /// # Errors
    ///
    /// Returns an error if the selected or discovered config file cannot be loaded.
    pub fn resolve(args: &Args) -> Result<Self> {
        let config = if args.no_config {
            Config::default()
        } else if let Some(path) = &args.config {
            Config::from_file(path)?
        } else {
            load_config(&env::current_dir()?)?
        };

        Ok(Self::merge(args, config))
    }

    #[must_use]
    pub fn merge(args: &Args, config: Config) -> Self {
        Self {
            import_from: args.import_from.clone().or(config.import_from),
            export_to: args.export_to.clone().or(config.export_to),
        }
    }
}
