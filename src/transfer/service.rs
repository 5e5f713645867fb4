//! Copy-link, copy-markup and download actions

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use super::{ClipboardSink, FileSink, TransferError};
use crate::api::IconFetchClient;
use crate::domain::{ColorSelection, IconDescriptor, IconStyle, download_file_name, with_color_param};
use crate::svg::recolor;

/// Fetches, recolors and hands SVG assets to the clipboard or disk
#[derive(Clone)]
pub struct ClipboardDownloadService {
    assets: Arc<dyn IconFetchClient>,
    clipboard: Arc<dyn ClipboardSink>,
    files: Arc<dyn FileSink>,
    server_side_color: bool,
}

impl ClipboardDownloadService {
    pub fn new(
        assets: Arc<dyn IconFetchClient>,
        clipboard: Arc<dyn ClipboardSink>,
        files: Arc<dyn FileSink>,
    ) -> Self {
        Self {
            assets,
            clipboard,
            files,
            server_side_color: false,
        }
    }

    /// Append `?color=` to copied links so the CDN pre-colors the asset
    pub fn with_server_side_color(mut self, enabled: bool) -> Self {
        self.server_side_color = enabled;
        self
    }

    /// Link that `copy_raw_link` would copy for a style variant
    pub fn resolved_link(
        &self,
        descriptor: &IconDescriptor,
        style: IconStyle,
        color: &ColorSelection,
    ) -> String {
        let url = descriptor.url_for_style(style);
        if self.server_side_color {
            with_color_param(&url, color.as_str())
        } else {
            url
        }
    }

    /// Copy the asset URL as plain text
    pub fn copy_raw_link(
        &self,
        descriptor: &IconDescriptor,
        color: &ColorSelection,
    ) -> Result<String, TransferError> {
        let link = self.resolved_link(descriptor, descriptor.style, color);
        self.clipboard
            .write_text(&link)
            .inspect_err(|e| warn!(icon = %descriptor.id(), "failed to copy link: {}", e))?;
        info!(icon = %descriptor.id(), "copied link");
        Ok(link)
    }

    /// Copy recolored SVG markup for the descriptor's own style
    pub async fn copy_recolored_markup(
        &self,
        descriptor: &IconDescriptor,
        color: &ColorSelection,
    ) -> Result<String, TransferError> {
        self.copy_recolored_variant(descriptor, color, descriptor.style)
            .await
    }

    /// Copy recolored SVG markup for any style variant
    pub async fn copy_recolored_variant(
        &self,
        descriptor: &IconDescriptor,
        color: &ColorSelection,
        style: IconStyle,
    ) -> Result<String, TransferError> {
        let markup = self.recolored_markup(descriptor, color, style).await?;
        self.clipboard
            .write_text(&markup)
            .inspect_err(|e| warn!(icon = %descriptor.id(), "failed to copy svg: {}", e))?;
        info!(icon = %descriptor.id(), %style, %color, "copied recolored svg");
        Ok(markup)
    }

    /// Save recolored SVG markup as `<key>-<style>-<hex>.svg`
    pub async fn download_recolored_asset(
        &self,
        descriptor: &IconDescriptor,
        color: &ColorSelection,
        style: IconStyle,
    ) -> Result<PathBuf, TransferError> {
        let markup = self.recolored_markup(descriptor, color, style).await?;
        let file_name = download_file_name(&descriptor.key, style, color.as_str());
        let path = self
            .files
            .save(&file_name, &markup)
            .inspect_err(|e| warn!(icon = %descriptor.id(), "failed to save svg: {}", e))?;
        info!(icon = %descriptor.id(), path = %path.display(), "downloaded recolored svg");
        Ok(path)
    }

    async fn recolored_markup(
        &self,
        descriptor: &IconDescriptor,
        color: &ColorSelection,
        style: IconStyle,
    ) -> Result<String, TransferError> {
        let url = descriptor.url_for_style(style);
        let raw = self
            .assets
            .fetch_svg(&url)
            .await
            .inspect_err(|e| warn!(icon = %descriptor.id(), "failed to fetch svg: {}", e))?;
        Ok(recolor(&raw, color.as_str()))
    }
}
