// SPDX-License-Identifier: MPL-2.0
//! This module handles the extension's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use media_columns::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::DEFAULT_MEDIAINFO_COMMAND;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MediaColumns";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Command (name or absolute path) used to inspect video/container files.
    #[serde(default)]
    pub mediainfo_command: Option<String>,
    /// Print columns with an empty value in the command-line host.
    #[serde(default)]
    pub show_empty: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            mediainfo_command: Some(DEFAULT_MEDIAINFO_COMMAND.to_string()),
            show_empty: Some(false),
        }
    }
}

impl Config {
    /// Returns the configured `mediainfo` command, falling back to the default.
    pub fn mediainfo_command(&self) -> &str {
        self.mediainfo_command
            .as_deref()
            .filter(|cmd| !cmd.trim().is_empty())
            .unwrap_or(DEFAULT_MEDIAINFO_COMMAND)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring invalid settings file");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
