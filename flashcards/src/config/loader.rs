// src/config/loader.rs
use crate::config::Config;
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".flashcards.toml";

/// Looks for a `.flashcards.toml` file starting from the given directory and
/// walking up through its parents until one is found.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return Some(config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads the nearest `.flashcards.toml` above `dir`.
///
/// # Returns
///
/// * `Ok(Config)` with the file's settings, or the defaults when no file exists
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let Some(config_file) = find_config_file(dir) else {
        log::debug!("No {CONFIG_FILE_NAME} found above {}", dir.display());
        return Ok(Config::default());
    };

    log::debug!("Using config file {}", config_file.display());
    Config::from_file(&config_file)
}
