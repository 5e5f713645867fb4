//! Settings configuration types

mod api;
mod grid;
mod voice;

pub use api::{ApiSettings, BASE_URL_ENV};
pub use grid::GridSettings;
pub use voice::VoiceSettings;

use serde::{Deserialize, Serialize};

/// Preview panel settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewSettings {
    /// Start previews on a dark background
    #[serde(default)]
    pub dark_mode: bool,
}
