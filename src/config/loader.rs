// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

use super::default::default_config;
use super::schema::BeautifierConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commit-beautifier.toml",
    ".commit-beautifier.toml",
    ".config/commit-beautifier.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(found) = dirs::home_dir().and_then(|home| first_existing(&home)) {
        return Some(found);
    }

    dirs::config_dir()
        .map(|dir| dir.join("commit-beautifier").join("config.toml"))
        .filter(|path| path.exists())
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<BeautifierConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(default_config())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<BeautifierConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to read config file: {}", e),
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<BeautifierConfig> {
    let mut config: BeautifierConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to parse TOML: {}", e),
    })?;

    config.rules.normalize();
    config.validate()?;
    Ok(config)
}
