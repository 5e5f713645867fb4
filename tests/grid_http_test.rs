//! End-to-end grid tests against a mocked search API

mod common;

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use glyphscout::api::{FetchError, IconFetchClient};
use glyphscout::grid::{GridEvent, QueryPaginationController};
use glyphscout::{IconStyle, QueryState, StyleFilter};

use common::{client_for, mount_search, param, search_body, search_requests};

fn controller(server: &MockServer) -> QueryPaginationController {
    QueryPaginationController::new(
        Arc::new(client_for(server)),
        90,
        Duration::from_millis(250),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn test_home_search_first_page() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_search(&server, "home", "all", 1, search_body(&uri, "home", "solid", 90, 212)).await;

    let mut grid = controller(&server);
    grid.set_query("home");
    grid.flush();
    let events = grid.settle_latest().await;

    assert!(matches!(events.last(), Some(GridEvent::Loaded { items: 90, total: 212, .. })));
    assert!(grid.displayed().len() <= 90);
    assert!(grid.known_total().unwrap() >= grid.displayed().len() as u64);
    assert_eq!(grid.total_pages(), Some(3));
    assert_eq!(grid.status_line(), "Total icons found: 212 · Page 1 of 3");

    let requests = search_requests(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(param(&requests[0], "q"), Some("home"));
    assert_eq!(param(&requests[0], "page"), Some("1"));
    assert_eq!(param(&requests[0], "limit"), Some("90"));
    assert_eq!(param(&requests[0], "style"), Some("all"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_style_switch_resets_page_and_refetches() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_search(&server, "home", "all", 1, search_body(&uri, "home", "solid", 90, 212)).await;
    mount_search(&server, "home", "all", 2, search_body(&uri, "home-p2", "solid", 90, 212)).await;
    mount_search(&server, "home", "brands", 1, search_body(&uri, "home-b", "brands", 4, 4)).await;

    let mut grid = controller(&server);
    grid.set_query("home");
    grid.flush();
    grid.settle_latest().await;

    assert!(grid.next());
    assert_eq!(grid.current_page(), 2);
    grid.flush();
    grid.settle_latest().await;
    assert_eq!(grid.displayed().items[0].key, "home-p2-0");

    grid.set_style_filter(StyleFilter::Only(IconStyle::Brands));
    assert_eq!(grid.current_page(), 1);
    grid.flush();
    grid.settle_latest().await;

    assert_eq!(grid.displayed().len(), 4);
    assert!(grid.displayed().items.iter().all(|i| i.style == IconStyle::Brands));
    assert_eq!(grid.status_line(), "Total icons found: 4");
    assert!(!grid.has_next_page());

    let requests = search_requests(&server).await;
    let last = requests.last().unwrap();
    assert_eq!(param(last, "style"), Some("brands"));
    assert_eq!(param(last, "page"), Some("1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_query_lists_everything() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_search(&server, "", "all", 1, search_body(&uri, "icon", "regular", 90, 2000)).await;

    let mut grid = controller(&server);
    grid.flush();
    grid.settle_latest().await;

    assert_eq!(grid.displayed().len(), 90);
    assert_eq!(grid.known_total(), Some(2000));
    assert_eq!(grid.page_window(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_keeps_previous_page() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_search(&server, "home", "all", 1, search_body(&uri, "home", "solid", 10, 10)).await;
    Mock::given(method("GET"))
        .and(path("/api/icons"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut grid = controller(&server);
    grid.set_query("home");
    grid.flush();
    grid.settle_latest().await;
    assert_eq!(grid.displayed().len(), 10);

    grid.set_query("broken");
    grid.flush();
    let events = grid.settle_latest().await;

    assert!(matches!(
        events.last(),
        Some(GridEvent::Failed {
            error: FetchError::Status { status: 503, .. },
            ..
        })
    ));
    assert!(matches!(
        grid.last_error(),
        Some(FetchError::Status { status: 503, .. })
    ));
    assert_eq!(grid.displayed().len(), 10);
    assert_eq!(grid.displayed().items[0].key, "home-0");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/icons"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_page(&QueryState::default()).await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed { .. }));
}
