//! CLI command implementations

pub mod dictate;
pub mod init;
pub mod preview;
pub mod search;
pub mod transfer;

use std::sync::Arc;

use glyphscout::api::HttpIconClient;
use glyphscout::config::Config;
use glyphscout::grid::QueryPaginationController;
use glyphscout::{IconDescriptor, ResultPage};

/// Grid controller wired to the configured search API
pub fn grid_from_config(config: &Config) -> QueryPaginationController {
    let client = Arc::new(HttpIconClient::from_settings(&config.api));
    QueryPaginationController::new(client, config.api.page_size, config.api.debounce())
}

/// One line per icon: `key  style  label  url`
pub fn print_page(page: &ResultPage) {
    let key_width = page.items.iter().map(|icon| icon.key.len()).max().unwrap_or(0);
    let label_width = page
        .items
        .iter()
        .map(|icon| icon.display_label().len())
        .max()
        .unwrap_or(0);
    for icon in &page.items {
        print_icon(icon, key_width, label_width);
    }
}

fn print_icon(icon: &IconDescriptor, key_width: usize, label_width: usize) {
    println!(
        "  {:key_width$}  {:8}  {:label_width$}  {}",
        icon.key,
        icon.style.as_str(),
        icon.display_label(),
        icon.cdn_url,
        key_width = key_width,
        label_width = label_width
    );
}
