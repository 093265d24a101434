// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` flag, passed in by the caller
//! 2. **Environment variable** (`IMAGE_TILT_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate, with the application name appended

use std::path::{Path, PathBuf};

/// Application name used for directory naming.
const APP_NAME: &str = "ImageTilt";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "IMAGE_TILT_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`. Platform defaults:
/// - Linux: `~/.config/ImageTilt/`
/// - macOS: `~/Library/Application Support/ImageTilt/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ImageTilt\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn config_dir(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
