//! Copy and download actions for a single icon
//!
//! - `ClipboardSink` / `FileSink`: platform side effects (arboard, filesystem)
//! - `ClipboardDownloadService`: fetch + recolor + hand off to a sink
//! - `TransferIndicator`: per-icon "copied!" flash that clears itself

mod clipboard;
mod file;
mod indicator;
mod service;

use std::path::PathBuf;

use crate::api::FetchError;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use file::{DownloadDir, FileSink};
pub use indicator::{FLASH_DURATION, Flash, TransferIndicator, TransferKind};
pub use service::ClipboardDownloadService;

/// A copy or download that did not complete
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to save {}: {message}", path.display())]
    Save { path: PathBuf, message: String },

    #[error(transparent)]
    Asset(#[from] FetchError),
}
