//! JSON shape of the search endpoint

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{IconDescriptor, ResultPage};

/// `{ "icons": { "data": [...], "totalDocs": n } }`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    icons: IconsEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IconsEnvelope {
    #[serde(default)]
    data: Vec<Value>,
    #[serde(default)]
    total_docs: u64,
}

/// Parse a search response body into a result page.
///
/// Only the envelope is strict; a record that is not a valid descriptor
/// (unknown style, missing key) is logged and left out of the page.
pub fn parse_search_body(body: &str) -> Result<ResultPage, serde_json::Error> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let items = response
        .icons
        .data
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<IconDescriptor>(record) {
            Ok(icon) => Some(icon),
            Err(e) => {
                warn!("skipping malformed icon record: {}", e);
                None
            }
        })
        .collect();

    Ok(ResultPage {
        items,
        total_matching: response.icons.total_docs,
    })
}
