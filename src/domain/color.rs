//! Color selections for the grid and the preview

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid-wide color when nothing is configured
pub const DEFAULT_GRID_COLOR: &str = "#3B82F6";

/// Palette offered by the preview
pub const PRESET_COLORS: [&str; 5] = ["#3B82F6", "#8B5CF6", "#EF4444", "#10B981", "#F59E0B"];

/// A hex color literal such as `#RRGGBB` or `#RGB`.
///
/// The value is not validated: whatever the user typed is handed to the
/// recolor transform as-is. `looks_valid` exists for UI hints only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSelection(String);

impl ColorSelection {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `#RGB` and `#RRGGBB`
    pub fn looks_valid(&self) -> bool {
        let Some(digits) = self.0.strip_prefix('#') else {
            return false;
        };
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_COLOR)
    }
}

impl fmt::Display for ColorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorSelection {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
