//! ureq-backed icon client
//!
//! ureq is blocking, so every call runs on tokio's blocking pool.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::wire::parse_search_body;
use super::{FetchError, IconFetchClient};
use crate::config::ApiSettings;
use crate::domain::{QueryState, ResultPage};

const USER_AGENT: &str = concat!("glyphscout/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the search API and the asset CDN
#[derive(Clone)]
pub struct HttpIconClient {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpIconClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(
            settings.base_url.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/icons?q=&page=&limit=&style=`
    pub fn search_url(&self, query: &QueryState) -> Result<Url, FetchError> {
        let raw = format!("{}/icons", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("q", &query.text)
            .append_pair("page", &query.page.to_string())
            .append_pair("limit", &query.page_size.to_string())
            .append_pair("style", query.style_filter.as_query_value());
        Ok(url)
    }

    fn get_text(agent: &ureq::Agent, url: &str) -> Result<String, FetchError> {
        let response = agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(status, _) => FetchError::Status {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(transport) => FetchError::Transport {
                url: url.to_string(),
                message: transport.to_string(),
            },
        })?;

        response.into_string().map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: format!("failed to read response: {}", e),
        })
    }

    async fn get_text_blocking(&self, url: String) -> Result<String, FetchError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || Self::get_text(&agent, &url))
            .await
            .map_err(|e| FetchError::Aborted(e.to_string()))?
    }
}

#[async_trait]
impl IconFetchClient for HttpIconClient {
    async fn fetch_page(&self, query: &QueryState) -> Result<ResultPage, FetchError> {
        let url = self.search_url(query)?;
        debug!(url = %url, "fetching icon page");

        let body = self.get_text_blocking(url.to_string()).await?;
        parse_search_body(&body).map_err(|e| FetchError::Malformed {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn fetch_svg(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching svg asset");
        self.get_text_blocking(url.to_string()).await
    }
}
