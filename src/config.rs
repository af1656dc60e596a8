//! Configuration loading.
//!
//! Optional JSON file at `<config dir>/zed-tabs/config.json`. A missing or
//! unreadable file falls back to defaults with a warning; configuration
//! never fails the command.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::menu::{MenuLocation, DEFAULT_SEPARATOR_THRESHOLD};
use crate::switcher::SelectorStrategy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Process name as seen by System Events
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Menu bar item holding the tab list
    #[serde(default = "default_menu_title")]
    pub menu_title: String,
    /// Separators to skip before entries count as tabs
    #[serde(default = "default_separator_threshold")]
    pub separator_threshold: u32,
    /// How tabs are re-located at switch time
    #[serde(default)]
    pub strategy: SelectorStrategy,
}

fn default_app_name() -> String {
    "Zed".to_string()
}

fn default_menu_title() -> String {
    "Window".to_string()
}

fn default_separator_threshold() -> u32 {
    DEFAULT_SEPARATOR_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: default_app_name(),
            menu_title: default_menu_title(),
            separator_threshold: default_separator_threshold(),
            strategy: SelectorStrategy::default(),
        }
    }
}

impl Config {
    pub fn menu_location(&self) -> MenuLocation {
        MenuLocation {
            app_name: self.app_name.clone(),
            menu_title: self.menu_title.clone(),
            separator_threshold: self.separator_threshold,
        }
    }
}

/// Path of the config file (`~/.config/zed-tabs/config.json` on most setups).
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zed-tabs")
        .join("config.json")
}

#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &PathBuf) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Invalid config JSON, using defaults");
            Config::default()
        }
    }
}
