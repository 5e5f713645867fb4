//! Preview command implementation

use std::sync::Arc;

use anyhow::Result;

use glyphscout::api::HttpIconClient;
use glyphscout::config::Config;
use glyphscout::preview::PreviewSession;
use glyphscout::{IconDescriptor, IconStyle, PRESET_COLORS};

use super::transfer::{color_or_default, resolve_icon, service};

/// Overrides applied on top of the grid defaults
#[derive(Debug, Default)]
pub struct PreviewOptions {
    pub variant: Option<IconStyle>,
    pub color: Option<String>,
    /// `Some` forces the background; `None` keeps `preview.dark_mode`
    pub dark: Option<bool>,
    pub copy: bool,
    pub download: bool,
}

/// Open a preview seeded from the config and apply the requested overrides
pub fn open_preview(
    config: &Config,
    icon: &IconDescriptor,
    options: &PreviewOptions,
) -> Result<PreviewSession> {
    let mut preview = PreviewSession::open(icon, &config.grid.color(), config.preview.dark_mode);

    if let Some(variant) = options.variant {
        preview.select_style(variant)?;
    }
    if let Some(color) = options.color.clone() {
        let color = color_or_default(config, Some(color));
        let preset = PRESET_COLORS
            .iter()
            .find(|preset| preset.eq_ignore_ascii_case(color.as_str()));
        match preset {
            Some(&preset) => preview.select_preset(preset),
            None => preview.set_custom_color(color),
        }
    }
    if options.dark.is_some_and(|dark| dark != preview.is_dark_mode()) {
        preview.toggle_dark_mode();
    }

    Ok(preview)
}

pub async fn preview_command(
    config: &Config,
    key: &str,
    style: Option<IconStyle>,
    options: PreviewOptions,
) -> Result<()> {
    let client = Arc::new(HttpIconClient::from_settings(&config.api));
    let icon = resolve_icon(client.as_ref(), key, style, config.api.page_size).await?;
    let preview = open_preview(config, &icon, &options)?;

    print_preview(&preview);

    let service = service(config, client);
    if options.copy {
        let markup = preview.copy_markup(&service).await?;
        println!("\nCopied {} bytes to the clipboard", markup.len());
    }
    if options.download {
        let path = preview.download(&service).await?;
        println!("\nSaved: {}", path.display());
    }
    Ok(())
}

fn print_preview(preview: &PreviewSession) {
    let icon = preview.descriptor();
    let styles: Vec<String> = preview
        .available_styles()
        .into_iter()
        .map(|style| {
            if style == preview.style() {
                format!("[{}]", style)
            } else {
                style.to_string()
            }
        })
        .collect();

    println!("{} ({})", icon.display_label(), icon.key);
    println!("  Styles:     {}", styles.join(" "));
    println!(
        "  Color:      {}{}",
        preview.color(),
        if preview.is_preset_selected() { " (preset)" } else { "" }
    );
    println!(
        "  Background: {}",
        if preview.is_dark_mode() { "dark" } else { "light" }
    );
    println!("  URL:        {}", preview.asset_url());
    println!("  File:       {}", preview.file_name());
}
