//! Clipboard access

use arboard::Clipboard;

use super::TransferError;

/// Destination for copied text
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), TransferError>;
}

/// The system clipboard via arboard.
///
/// A fresh handle is opened per write; arboard handles are not `Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), TransferError> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| TransferError::Clipboard(format!("failed to access clipboard: {}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| TransferError::Clipboard(format!("failed to copy to clipboard: {}", e)))
    }
}
