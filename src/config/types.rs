//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::filters::DEFAULT_MIN_FILTER_LENGTH;
use crate::domain::resolver::DEFAULT_SEARCH_URL;

/// Message shown when a navigation is cancelled by a filter.
pub const DEFAULT_BLOCK_MESSAGE: &str = "Page is blocked";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search engine prefix; the encoded query is appended to it
    pub search_url: String,

    /// Minimum trimmed length for a new filter phrase
    pub min_filter_length: usize,

    /// Message reported for blocked pages
    pub block_message: String,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Path to the JSON state file (filters and last opened page)
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            min_filter_length: DEFAULT_MIN_FILTER_LENGTH,
            block_message: DEFAULT_BLOCK_MESSAGE.to_string(),
            debug: false,
            log_path: default_log_path(),
            store_path: default_store_path(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir_or_home(config_dir).join("logs")
}

/// Get default store path (relative to config directory).
pub fn default_store_path() -> PathBuf {
    default_store_path_for_config_dir(None)
}

/// Get store path based on config directory.
pub fn default_store_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir_or_home(config_dir).join("state.json")
}

fn config_dir_or_home(config_dir: Option<&Path>) -> PathBuf {
    config_dir.map(|d| d.to_path_buf()).unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("website-filter")
    })
}
