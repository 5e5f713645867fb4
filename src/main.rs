use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use glyphscout::config::Config;
use glyphscout::{IconStyle, StyleFilter};

mod cli;

#[derive(Parser)]
#[command(name = "glyphscout")]
#[command(about = "Search, recolor, copy and download SVG icons")]
#[command(version)]
struct Cli {
    /// Working directory for project-local config (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .glyphscout/config.toml, then ~/.glyphscout/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the icon index and print one page of results
    Search {
        /// Search text (empty lists everything)
        query: Option<String>,

        /// Style filter: all, solid, regular, brands, ...
        #[arg(short, long, default_value = "all")]
        style: StyleFilter,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Copy an icon's asset URL to the clipboard
    CopyLink {
        /// Icon key
        key: String,

        #[arg(short, long)]
        style: Option<IconStyle>,

        /// Hex color passed to the CDN when server-side coloring is enabled
        #[arg(long)]
        color: Option<String>,
    },

    /// Copy recolored SVG markup to the clipboard
    CopySvg {
        /// Icon key
        key: String,

        #[arg(short, long)]
        style: Option<IconStyle>,

        /// Hex fill color (defaults to grid.default_color)
        #[arg(long)]
        color: Option<String>,
    },

    /// Save recolored SVG markup to the download directory
    Download {
        /// Icon key
        key: String,

        #[arg(short, long)]
        style: Option<IconStyle>,

        /// Hex fill color (defaults to grid.default_color)
        #[arg(long)]
        color: Option<String>,
    },

    /// Show one icon with preview overrides, optionally copying or saving it
    Preview {
        /// Icon key
        key: String,

        /// Style used to look the icon up
        #[arg(short, long)]
        style: Option<IconStyle>,

        /// Style variant to preview (must be published for the key)
        #[arg(long)]
        variant: Option<IconStyle>,

        /// Preset or custom hex color (defaults to grid.default_color)
        #[arg(long)]
        color: Option<String>,

        /// Preview on a dark background (default: preview.dark_mode)
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Preview on a light background
        #[arg(long)]
        light: bool,

        /// Copy the previewed markup to the clipboard
        #[arg(long)]
        copy: bool,

        /// Save the previewed markup to the download directory
        #[arg(long)]
        download: bool,
    },

    /// Dictate a search query through the microphone
    Dictate {
        /// Keep listening through pauses until Ctrl+C
        #[arg(long)]
        continuous: bool,
    },

    /// Write a default configuration file
    Init {
        /// Create .glyphscout/config.toml in the working directory instead of ~/.glyphscout
        #[arg(long)]
        local: bool,

        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    if let Commands::Init { local, force } = cli.command {
        return cli::init::init_command(&work_dir, cli.config, local, force).await;
    }

    let config = Config::load(cli.config.as_deref(), &work_dir)?;

    match cli.command {
        Commands::Search { query, style, page } => {
            cli::search::search_command(&config, query, style, page).await?;
        }
        Commands::CopyLink { key, style, color } => {
            cli::transfer::copy_link_command(&config, &key, style, color).await?;
        }
        Commands::CopySvg { key, style, color } => {
            cli::transfer::copy_svg_command(&config, &key, style, color).await?;
        }
        Commands::Download { key, style, color } => {
            cli::transfer::download_command(&config, &key, style, color).await?;
        }
        Commands::Preview {
            key,
            style,
            variant,
            color,
            dark,
            light,
            copy,
            download,
        } => {
            let options = cli::preview::PreviewOptions {
                variant,
                color,
                dark: if dark { Some(true) } else if light { Some(false) } else { None },
                copy,
                download,
            };
            cli::preview::preview_command(&config, &key, style, options).await?;
        }
        Commands::Dictate { continuous } => {
            cli::dictate::dictate_command(&config, continuous).await?;
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}
