//! Icon grid settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{ColorSelection, DEFAULT_GRID_COLOR};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Color applied to copied and downloaded icons
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Where downloads are saved; the user's download directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
}

fn default_color() -> String {
    DEFAULT_GRID_COLOR.to_string()
}

impl GridSettings {
    pub fn color(&self) -> ColorSelection {
        ColorSelection::new(self.default_color.as_str())
    }

    /// Configured directory, else `dirs::download_dir`, else the current directory
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            download_dir: None,
        }
    }
}
