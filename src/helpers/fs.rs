//! File System Utilities
//!
//! Configuration directory lookup.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// File name of the default table configuration
pub const CONFIG_FILE_NAME: &str = "table.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "tabview", "tabview").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/tabview/` or `$XDG_CONFIG_HOME/tabview/`
/// - **macOS**: `~/Library/Application Support/dev.tabview.tabview/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\tabview\tabview\config\`
///
/// The directory is not created; a missing config falls back to defaults.
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Path of the default table configuration file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

