//! Configuration loading and management

mod io;
mod settings;


pub use io::write_config_atomic;
pub use settings::{ApiSettings, BASE_URL_ENV, GridSettings, PreviewSettings, VoiceSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search API and fetch behavior
    #[serde(default)]
    pub api: ApiSettings,

    /// Grid color and downloads
    #[serde(default)]
    pub grid: GridSettings,

    /// Voice dictation
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Preview panel
    #[serde(default)]
    pub preview: PreviewSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Config file that `load` would read, if any.
    ///
    /// Looks for: the explicit path, `<work_dir>/.glyphscout/config.toml`,
    /// then `~/.glyphscout/config.toml`.
    pub fn locate(explicit: Option<&Path>, work_dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = Self::local_config_path(work_dir);
        if local.exists() {
            return Some(local);
        }

        let global = Self::global_config_path();
        if global.exists() {
            return Some(global);
        }

        None
    }

    /// Load the first config found by `locate`, or defaults when none exists.
    /// An explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<Self> {
        let mut config = match Self::locate(explicit, work_dir) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.api.base_url = base_url;
            }
        }

        Ok(config)
    }
}
