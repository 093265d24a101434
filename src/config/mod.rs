// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file. The file is edited by hand; the program never
//! writes it.
//!
//! # Examples
//!
//! ```no_run
//! use image_tilt::config;
//!
//! let temp_dir = std::env::temp_dir().join("image_tilt_doc");
//! std::fs::create_dir_all(&temp_dir).expect("Failed to create dir");
//! let file = temp_dir.join("settings.toml");
//! std::fs::write(&file, "language = \"fr\"\n").expect("Failed to write settings");
//!
//! let loaded = config::load_from_path(&file).expect("Failed to load from path");
//! assert_eq!(loaded.language, Some("fr".to_string()));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::media::Resampling;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub resampling: Option<Resampling>,
}

impl Config {
    /// Resampling kernel to use, falling back to the default.
    #[must_use]
    pub fn resampling(&self) -> Resampling {
        self.resampling.unwrap_or_default()
    }
}

/// Loads `settings.toml` from the resolved config directory.
///
/// A missing directory or file yields the default configuration.
pub fn load(config_dir_override: Option<&Path>) -> Result<Config> {
    if let Some(dir) = paths::config_dir(config_dir_override) {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return load_from_path(&path);
        }
        log::debug!("no config file at {}", path.display());
    }
    Ok(Config::default())
}

/// Parses a settings file. Invalid TOML or unknown values are an
/// [`Error::Config`](crate::error::Error::Config).
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
