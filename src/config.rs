//! Settings file handling.
//!
//! Settings are read from the first file found in this order:
//! 1. the path given with `--config`
//! 2. the path in `SHOWSTAGE_CONFIG`
//! 3. `showstage.toml` in the current directory
//! 4. `showstage/config.toml` in the user's configuration directory
//!
//! When no file is found the defaults are used.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "SHOWSTAGE_CONFIG";

/// Settings file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "showstage.toml";

/// How command output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub output: OutputSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Colorize table output
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Default log level when neither `SHOWSTAGE_LOG` nor `-v` is given
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings using the standard lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        match locate(explicit, &cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }
}

/// Find the settings file to use.
///
/// Explicit and environment paths are returned even if they do not exist so
/// that a typo surfaces as a read error instead of silently using defaults.
pub fn locate(explicit: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let local = search_dir.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("showstage").join("config.toml"))
        .filter(|path| path.is_file())
}
