//! Single-icon preview with its own style and color
//!
//! A preview starts from a copy of the grid color and never writes back to
//! it; the inspected descriptor is cloned and left untouched.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::{ColorSelection, IconDescriptor, IconStyle, PRESET_COLORS};
use crate::transfer::{ClipboardDownloadService, TransferError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("style {style} is not available for {key}")]
    UnknownStyle { key: String, style: IconStyle },
}

/// Per-preview override state
#[derive(Debug, Clone)]
pub struct PreviewSession {
    descriptor: IconDescriptor,
    style: IconStyle,
    color: ColorSelection,
    custom_color: Option<ColorSelection>,
    picker_open: bool,
    dark_mode: bool,
}

impl PreviewSession {
    /// Open a preview seeded with the grid's current color
    pub fn open(descriptor: &IconDescriptor, grid_color: &ColorSelection, dark_mode: bool) -> Self {
        Self {
            descriptor: descriptor.clone(),
            style: descriptor.style,
            color: grid_color.clone(),
            custom_color: None,
            picker_open: false,
            dark_mode,
        }
    }

    pub fn descriptor(&self) -> &IconDescriptor {
        &self.descriptor
    }

    pub fn style(&self) -> IconStyle {
        self.style
    }

    pub fn color(&self) -> &ColorSelection {
        &self.color
    }

    pub fn custom_color(&self) -> Option<&ColorSelection> {
        self.custom_color.as_ref()
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn available_styles(&self) -> Vec<IconStyle> {
        self.descriptor.available_styles()
    }

    pub fn presets(&self) -> &'static [&'static str] {
        &PRESET_COLORS
    }

    /// Switch to another published style of the same icon
    pub fn select_style(&mut self, style: IconStyle) -> Result<(), PreviewError> {
        if !self.available_styles().contains(&style) {
            return Err(PreviewError::UnknownStyle {
                key: self.descriptor.key.clone(),
                style,
            });
        }
        debug!(icon = %self.descriptor.key, %style, "preview style selected");
        self.style = style;
        Ok(())
    }

    /// Pick a palette entry; closes the custom picker
    pub fn select_preset(&mut self, color: impl Into<ColorSelection>) {
        let color = color.into();
        self.custom_color = Some(color.clone());
        self.color = color;
        self.picker_open = false;
    }

    /// Free-form color from the custom picker or hex field
    pub fn set_custom_color(&mut self, color: impl Into<ColorSelection>) {
        let color = color.into();
        self.custom_color = Some(color.clone());
        self.color = color;
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// True when the active color is one of the presets
    pub fn is_preset_selected(&self) -> bool {
        PRESET_COLORS.contains(&self.color.as_str())
    }

    /// Asset URL for the selected style
    pub fn asset_url(&self) -> String {
        self.descriptor.url_for_style(self.style)
    }

    /// File name a download would get with the current overrides
    pub fn file_name(&self) -> String {
        crate::domain::download_file_name(&self.descriptor.key, self.style, self.color.as_str())
    }

    pub async fn copy_markup(
        &self,
        service: &ClipboardDownloadService,
    ) -> Result<String, TransferError> {
        service
            .copy_recolored_variant(&self.descriptor, &self.color, self.style)
            .await
    }

    pub async fn download(
        &self,
        service: &ClipboardDownloadService,
    ) -> Result<PathBuf, TransferError> {
        service
            .download_recolored_asset(&self.descriptor, &self.color, self.style)
            .await
    }
}
