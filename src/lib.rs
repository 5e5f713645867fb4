//! glyphscout - icon discovery from the terminal
//!
//! Searches a remote icon index page by page, recolors SVG assets and hands
//! them to the clipboard or the download directory. The search query can be
//! typed or dictated.
//!
//! ## Building blocks
//!
//! - [`grid::QueryPaginationController`]: debounced, last-request-wins
//!   fetching of result pages for the current query, style filter and page
//! - [`svg::recolor`]: forces every fill of an SVG to one color
//! - [`transfer::ClipboardDownloadService`]: copy link, copy markup, download
//! - [`voice::VoiceDictationController`]: speech into the search query
//! - [`preview::PreviewSession`]: per-icon style and color overrides
//!
//! Side effects live behind traits ([`api::IconFetchClient`],
//! [`transfer::ClipboardSink`], [`transfer::FileSink`],
//! [`voice::SpeechEngine`], [`voice::CuePlayer`]) so every controller can be
//! driven without a network, clipboard or microphone.

pub mod api;
pub mod config;
pub mod domain;
pub mod grid;
pub mod preview;
pub mod svg;
pub mod transfer;
pub mod voice;

pub use domain::*;
