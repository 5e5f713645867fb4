//! Remote icon index and CDN access
//!
//! `IconFetchClient` is the seam the grid controller and the transfer service
//! talk to; `HttpIconClient` is the ureq-backed implementation.

mod client;
mod wire;

use async_trait::async_trait;

use crate::domain::{QueryState, ResultPage};

pub use client::HttpIconClient;
pub use wire::parse_search_body;

/// A search or asset request that did not complete successfully
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Malformed { url: String, message: String },

    #[error("fetch task aborted: {0}")]
    Aborted(String),
}

/// Source of result pages and raw SVG assets
#[async_trait]
pub trait IconFetchClient: Send + Sync {
    /// Fetch one page of icons for the given query state
    async fn fetch_page(&self, query: &QueryState) -> Result<ResultPage, FetchError>;

    /// Fetch the raw SVG text behind an asset URL
    async fn fetch_svg(&self, url: &str) -> Result<String, FetchError>;
}
