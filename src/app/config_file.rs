//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/pageview/config.toml`

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::suggest::DEFAULT_MAX_RESULTS;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Suggestions settings
    pub suggestions: SuggestionsConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Term loaded at startup and bound to the home key
    pub homepage: String,
    /// Show hidden files in listings and search results
    pub show_hidden: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            homepage: ".".to_string(),
            show_hidden: false,
            mouse_enabled: true,
        }
    }
}

/// Suggestions panel settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    /// Maximum suggestion rows
    pub max_results: usize,
    /// Maximum retained history entries
    pub history_size: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            history_size: crate::history::DEFAULT_HISTORY_SIZE,
        }
    }
}

impl ConfigFile {
    /// Config file path (~/.config/pageview/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pageview").join("config.toml"))
    }

    /// Load from the default path, falling back to defaults on any error
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }
}
