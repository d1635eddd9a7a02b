//! Configuration module for autocomplete-cli
//!
//! Handles loading settings from an optional YAML file and environment variables.

mod settings;

pub use settings::*;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a settings file
pub const SETTINGS_PATH_ENV: &str = "AUTOCOMPLETE_SETTINGS_PATH";

/// Load settings from an explicit path, the environment, or default locations
///
/// An explicit path that does not exist is an error; missing default files are
/// not, and fall back to built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Settings file not found: {}", path.display());
        }
        return load_from(path);
    }

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return load_from(&path);
        }
    }

    for path in default_paths() {
        if path.exists() {
            return load_from(&path);
        }
    }

    debug!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn load_from(path: &Path) -> Result<Settings> {
    debug!("Loading settings from: {}", path.display());
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("autocomplete.yml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("autocomplete/settings.yml"));
    }
    paths
}
