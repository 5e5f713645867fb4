//! Init command implementation

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use glyphscout::config::{Config, write_config_atomic};

/// Default configuration content for glyphscout init
pub const DEFAULT_CONFIG: &str = r##"# glyphscout configuration
# ========================
#
# Lookup order: --config <path>, ./.glyphscout/config.toml, ~/.glyphscout/config.toml.
# Every key is optional; missing keys fall back to the values shown here.

# ============================================================================
# API - Icon search index and CDN
# ============================================================================
#
#   base_url          - Search API root; requests go to <base_url>/icons
#                       (GLYPHSCOUT_API_URL overrides this)
#   page_size         - Icons per page
#   debounce_ms       - Quiet time after typing before a search is sent
#   timeout_secs      - Per-request timeout
#   server_side_color - Append ?color= to copied links instead of recoloring locally

[api]
base_url = "http://localhost:4000/api"
page_size = 90
debounce_ms = 250
timeout_secs = 15
server_side_color = false

# ============================================================================
# GRID - Copy and download defaults
# ============================================================================
#
#   default_color - Fill color for copied and downloaded SVGs
#   download_dir  - Where downloads go (default: your Downloads folder)

[grid]
default_color = "#3B82F6"
# download_dir = "/path/to/icons"

# ============================================================================
# VOICE - Dictate the search query (needs sox and whisper-cpp)
# ============================================================================
#
#   continuous    - Keep listening after a pause until stopped
#   language      - auto, en, de, fr, ...
#   whisper_model - tiny, base, small, medium, large
#                   (model file: ~/.glyphscout/whisper-models/ggml-<model>.bin)
#   chunk_secs    - Length of each recorded chunk
#   cues          - Play a short tone when listening starts and stops

[voice]
enabled = true
continuous = true
language = "auto"
whisper_model = "base"
chunk_secs = 4
cues = true

# ============================================================================
# PREVIEW
# ============================================================================
#
#   dark_mode - Start `glyphscout preview` on a dark background
#               (--dark / --light override it per call)

[preview]
dark_mode = false
"##;

/// Write a default config.
/// By default creates the global config at ~/.glyphscout/config.toml;
/// `local` targets .glyphscout/config.toml in the working directory and
/// `--config` any other path.
pub async fn init_command(
    work_dir: &Path,
    config_path: Option<PathBuf>,
    local: bool,
    force: bool,
) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None if local => Config::local_config_path(work_dir),
        None => Config::global_config_path(),
    };

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_config_atomic(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
