//! Configuration for mgq.
//!
//! Config file resolution order:
//! 1. Explicit path passed with `--config`
//! 2. MGQ_CONFIG environment variable
//! 3. Default: `mgq.toml` in the user config directory
//!
//! A missing file is not an error; built-in defaults are used instead.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How parsed documents are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical URI followed by a parameter table
    Table,
    /// JSON object with the canonical URI and its parameters
    Json,
    /// Canonical URI only
    Uri,
}

/// mgq configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Drop invalid parameters instead of failing.
    #[serde(default)]
    pub lenient: bool,

    /// Default output format.
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Default log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lenient: false,
            format: default_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config using the standard resolution order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save config to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Resolve the config file path using the standard resolution order.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var("MGQ_CONFIG") {
        return Some(PathBuf::from(path));
    }

    ProjectDirs::from("", "", "mgq").map(|dirs| dirs.config_dir().join("mgq.toml"))
}
