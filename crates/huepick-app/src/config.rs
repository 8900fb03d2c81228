//! Application configuration, persisted as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory name under the platform config dir.
pub const CONFIG_DIR: &str = "huepick";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";
/// Environment variable that overrides `log_filter`.
pub const LOG_ENV: &str = "HUEPICK_LOG";

/// Top-level configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"huepick_canvas=debug"`.
    pub log_filter: String,
    /// Default gradient size.
    pub gradient: GradientConfig,
    /// Print reports as JSON unless told otherwise.
    pub json_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            gradient: GradientConfig::default(),
            json_output: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for GradientConfig {
    fn default() -> Self {
        // One column per degree of hue
        Self {
            width: 360,
            height: 100,
        }
    }
}

impl AppConfig {
    /// `<config_dir>/huepick/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Pick the config file to read: the explicit path if given, otherwise
    /// the default path when that file exists.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.is_file()),
        }
    }

    /// Load from `path`, or return defaults when there is nothing to load.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
