//! Icon search API settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_PAGE_SIZE;

/// Environment variable that overrides `api.base_url`
pub const BASE_URL_ENV: &str = "GLYPHSCOUT_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the search API; `/icons` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Icons per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Quiet time after the last query change before a fetch is issued (ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ask the CDN to recolor via `?color=` instead of recoloring locally
    #[serde(default)]
    pub server_side_color: bool,
}

fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_timeout_secs() -> u64 {
    15
}

impl ApiSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            timeout_secs: default_timeout_secs(),
            server_side_color: false,
        }
    }
}
