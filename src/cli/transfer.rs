//! Copy and download command implementations

use std::sync::Arc;

use anyhow::{Context, Result, bail};

use glyphscout::api::{HttpIconClient, IconFetchClient};
use glyphscout::config::Config;
use glyphscout::transfer::{ClipboardDownloadService, DownloadDir, SystemClipboard};
use glyphscout::{ColorSelection, IconDescriptor, IconStyle, QueryState, StyleFilter};

/// Look up an icon by exact key, optionally restricted to one style
pub async fn resolve_icon(
    client: &dyn IconFetchClient,
    key: &str,
    style: Option<IconStyle>,
    page_size: u32,
) -> Result<IconDescriptor> {
    let mut query = QueryState::new(page_size);
    query.text = key.to_string();
    query.style_filter = style.map(StyleFilter::Only).unwrap_or_default();

    let page = client
        .fetch_page(&query)
        .await
        .with_context(|| format!("Failed to look up icon '{}'", key))?;

    let exact = page
        .items
        .iter()
        .find(|icon| icon.key == key && query.style_filter.matches(icon.style));
    if let Some(icon) = exact {
        return Ok(icon.clone());
    }

    if page.is_empty() {
        bail!("No icon matches '{}'", key);
    }
    let suggestions: Vec<&str> = page.items.iter().take(5).map(|i| i.key.as_str()).collect();
    bail!(
        "No icon named '{}'. Did you mean: {}?",
        key,
        suggestions.join(", ")
    )
}

pub fn service(config: &Config, client: Arc<HttpIconClient>) -> ClipboardDownloadService {
    ClipboardDownloadService::new(
        client,
        Arc::new(SystemClipboard),
        Arc::new(DownloadDir::new(config.grid.resolved_download_dir())),
    )
    .with_server_side_color(config.api.server_side_color)
}

pub fn color_or_default(config: &Config, color: Option<String>) -> ColorSelection {
    let color = color.map(ColorSelection::new).unwrap_or_else(|| config.grid.color());
    if !color.looks_valid() {
        tracing::warn!("'{}' does not look like a hex color", color);
    }
    color
}

pub async fn copy_link_command(
    config: &Config,
    key: &str,
    style: Option<IconStyle>,
    color: Option<String>,
) -> Result<()> {
    let client = Arc::new(HttpIconClient::from_settings(&config.api));
    let icon = resolve_icon(client.as_ref(), key, style, config.api.page_size).await?;
    let color = color_or_default(config, color);

    let link = service(config, client).copy_raw_link(&icon, &color)?;
    println!("Copied link: {}", link);
    Ok(())
}

pub async fn copy_svg_command(
    config: &Config,
    key: &str,
    style: Option<IconStyle>,
    color: Option<String>,
) -> Result<()> {
    let client = Arc::new(HttpIconClient::from_settings(&config.api));
    let icon = resolve_icon(client.as_ref(), key, style, config.api.page_size).await?;
    let color = color_or_default(config, color);

    let markup = service(config, client)
        .copy_recolored_markup(&icon, &color)
        .await?;
    println!("Copied {} ({} bytes, {})", icon.id(), markup.len(), color);
    Ok(())
}

pub async fn download_command(
    config: &Config,
    key: &str,
    style: Option<IconStyle>,
    color: Option<String>,
) -> Result<()> {
    let client = Arc::new(HttpIconClient::from_settings(&config.api));
    let icon = resolve_icon(client.as_ref(), key, style, config.api.page_size).await?;
    let color = color_or_default(config, color);

    let path = service(config, client)
        .download_recolored_asset(&icon, &color, icon.style)
        .await?;
    println!("Saved: {}", path.display());
    Ok(())
}
