//! Shared test utilities for HTTP integration tests

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use glyphscout::api::HttpIconClient;

/// Path prefix of the mocked search API
pub const API_PATH: &str = "/api";

pub const HOUSE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 576 512"><path fill="currentColor" d="M575.8 255.5"/><circle fill="#abc" r="4"/></svg>"##;

/// Client pointed at the mock server's `/api`
pub fn client_for(server: &MockServer) -> HttpIconClient {
    HttpIconClient::new(format!("{}{}", server.uri(), API_PATH), Duration::from_secs(5))
}

/// One wire-format icon descriptor whose asset lives on `server`
pub fn icon_json(server_uri: &str, key: &str, style: &str) -> Value {
    json!({
        "key": key,
        "label": key.replace('-', " "),
        "style": style,
        "cdnUrl": format!("{}/cdn/{}/{}.svg", server_uri, style, key),
    })
}

/// Search response with `count` icons named `<prefix>-<n>` and the given total
pub fn search_body(server_uri: &str, prefix: &str, style: &str, count: usize, total: u64) -> Value {
    let data: Vec<Value> = (0..count)
        .map(|i| icon_json(server_uri, &format!("{}-{}", prefix, i), style))
        .collect();
    json!({ "icons": { "data": data, "totalDocs": total } })
}

/// Answer `GET /api/icons?q=<q>&style=<style>&page=<page>` with `body`
pub async fn mount_search(server: &MockServer, q: &str, style: &str, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/icons", API_PATH)))
        .and(query_param("q", q))
        .and(query_param("style", style))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve `svg` at `/cdn/<style>/<key>.svg`
pub async fn mount_svg(server: &MockServer, style: &str, key: &str, svg: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/cdn/{}/{}.svg", style, key)))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/svg+xml")
                .set_body_string(svg),
        )
        .mount(server)
        .await;
}

/// Query string pairs of every request the server received for `/api/icons`
pub async fn search_requests(server: &MockServer) -> Vec<Vec<(String, String)>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path().ends_with("/icons"))
        .map(|request| {
            request
                .url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .collect()
}

/// Value of `key` in a recorded query
pub fn param<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
