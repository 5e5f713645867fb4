//! Search command implementation

use anyhow::{Result, bail};

use glyphscout::StyleFilter;
use glyphscout::config::Config;

use super::{grid_from_config, print_page};

/// Fetch and print one page of results
pub async fn search_command(
    config: &Config,
    query: Option<String>,
    style: StyleFilter,
    page: u32,
) -> Result<()> {
    let mut grid = grid_from_config(config);
    grid.set_query(query.unwrap_or_default());
    grid.set_style_filter(style);
    grid.go_to_page(page);

    grid.flush();
    grid.settle_latest().await;

    if let Some(err) = grid.last_error() {
        bail!("Search failed: {}", err);
    }

    let results = grid.displayed();
    if results.is_empty() {
        println!("No icons found.");
        return Ok(());
    }

    println!("{}\n", grid.status_line());
    print_page(results);

    let window = grid.page_window();
    if window.len() > 1 {
        let pages: Vec<String> = window
            .iter()
            .map(|&p| {
                if p == grid.current_page() {
                    format!("[{}]", p)
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!("\nPages: {}", pages.join(" "));
    }

    Ok(())
}
