//! Configuration management for the route store.
//!
//! Handles loading console settings from a TOML file. A missing file is not
//! an error; every setting has a default.

use crate::commands::messages;
use crate::error::{Result, RouteStoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Console text settings.
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Console text settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Banner printed once at start-up.
    #[serde(default = "default_welcome")]
    pub welcome: String,

    /// Prompt printed before each command.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to print the banner at all.
    #[serde(default = "default_show_welcome")]
    pub show_welcome: bool,
}

fn default_welcome() -> String {
    messages::WELCOME.to_string()
}

fn default_prompt() -> String {
    messages::PROMPT.to_string()
}

fn default_show_welcome() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
            prompt: default_prompt(),
            show_welcome: default_show_welcome(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("route-store")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| RouteStoreError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            RouteStoreError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
