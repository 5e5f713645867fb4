//! Copy and download against a mocked CDN

mod common;

use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use wiremock::MockServer;

use glyphscout::api::{FetchError, IconFetchClient};
use glyphscout::preview::PreviewSession;
use glyphscout::transfer::{
    ClipboardDownloadService, ClipboardSink, DownloadDir, Flash, TransferError,
    TransferIndicator, TransferKind,
};
use glyphscout::{ColorSelection, IconDescriptor, IconStyle, QueryState};

use common::{HOUSE_SVG, client_for, icon_json, mount_search, mount_svg};

#[derive(Default)]
struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    fn text(&self) -> Option<String> {
        self.text.lock().unwrap().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), TransferError> {
        *self.text.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

struct Setup {
    server: MockServer,
    clipboard: Arc<MemoryClipboard>,
    downloads: TempDir,
    service: ClipboardDownloadService,
}

async fn setup() -> Setup {
    let server = MockServer::start().await;
    let clipboard = Arc::new(MemoryClipboard::default());
    let downloads = TempDir::new().unwrap();
    let service = ClipboardDownloadService::new(
        Arc::new(client_for(&server)),
        clipboard.clone(),
        Arc::new(DownloadDir::new(downloads.path().join("icons"))),
    );
    Setup {
        server,
        clipboard,
        downloads,
        service,
    }
}

fn house(server: &MockServer) -> IconDescriptor {
    let mut icon: IconDescriptor =
        serde_json::from_value(icon_json(&server.uri(), "house", "solid")).unwrap();
    icon.styles = vec![IconStyle::Solid, IconStyle::Regular];
    icon
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_writes_recolored_file() {
    let s = setup().await;
    mount_svg(&s.server, "solid", "house", HOUSE_SVG).await;

    let color = ColorSelection::new("#EF4444");
    let path = s
        .service
        .download_recolored_asset(&house(&s.server), &color, IconStyle::Solid)
        .await
        .unwrap();

    assert_eq!(path, s.downloads.path().join("icons").join("house-solid-EF4444.svg"));
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with(r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 576 512" fill="#EF4444">"##));
    assert!(!saved.contains("currentColor"));
    assert!(!saved.contains("#abc"));
    assert!(saved.contains(r#"d="M575.8 255.5""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_copy_markup_puts_svg_on_clipboard() {
    let s = setup().await;
    mount_svg(&s.server, "solid", "house", HOUSE_SVG).await;

    let markup = s
        .service
        .copy_recolored_markup(&house(&s.server), &ColorSelection::new("#10B981"))
        .await
        .unwrap();

    assert_eq!(s.clipboard.text(), Some(markup.clone()));
    assert_eq!(markup.matches(r##"fill="#10B981""##).count(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_asset_is_reported_and_nothing_saved() {
    let s = setup().await;
    let mut indicator = TransferIndicator::default();
    let icon = house(&s.server);

    let result = s
        .service
        .download_recolored_asset(&icon, &ColorSelection::default(), IconStyle::Solid)
        .await;

    assert!(matches!(
        result,
        Err(TransferError::Asset(FetchError::Status { status: 404, .. }))
    ));
    assert!(!s.downloads.path().join("icons").exists());

    let now = std::time::Instant::now();
    let flash = indicator.record(&icon.id(), TransferKind::Downloaded, &result, now);
    assert_eq!(flash, Flash::Failed(TransferKind::Downloaded));
    assert_eq!(s.clipboard.text(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_preview_downloads_other_style() {
    let s = setup().await;
    mount_svg(&s.server, "regular", "house", HOUSE_SVG).await;

    let icon = house(&s.server);
    let mut preview = PreviewSession::open(&icon, &ColorSelection::new("#000000"), false);
    preview.select_style(IconStyle::Regular).unwrap();
    preview.select_preset("#8B5CF6");

    let path = preview.download(&s.service).await.unwrap();
    assert_eq!(path.file_name().unwrap(), "house-regular-8B5CF6.svg");
    assert!(std::fs::read_to_string(path).unwrap().contains(r##"fill="#8B5CF6""##));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_descriptor_feeds_copy_link() {
    let s = setup().await;
    let uri = s.server.uri();
    mount_search(
        &s.server,
        "house",
        "all",
        1,
        serde_json::json!({ "icons": { "data": [icon_json(&uri, "house", "solid")], "totalDocs": 1 } }),
    )
    .await;

    let mut query = QueryState::default();
    query.text = "house".to_string();
    let page = client_for(&s.server).fetch_page(&query).await.unwrap();
    let icon = &page.items[0];

    let service = s.service.clone().with_server_side_color(true);
    let link = service
        .copy_raw_link(icon, &ColorSelection::new("#3B82F6"))
        .unwrap();

    assert_eq!(link, format!("{}/cdn/solid/house.svg?color=%233B82F6", uri));
    assert_eq!(s.clipboard.text(), Some(link));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_key_with_parent_segment_stays_in_download_dir() {
    let s = setup().await;
    mount_svg(&s.server, "solid", "house", HOUSE_SVG).await;

    let mut icon = house(&s.server);
    icon.key = "../escaped".to_string();

    let path = s
        .service
        .download_recolored_asset(&icon, &ColorSelection::new("#112233"), IconStyle::Solid)
        .await
        .unwrap();

    assert_eq!(path.parent().unwrap(), s.downloads.path().join("icons"));
    assert_eq!(path.file_name().unwrap(), "--escaped-solid-112233.svg");
    assert!(!s.downloads.path().join("escaped-solid-112233.svg").exists());
}
