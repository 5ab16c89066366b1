use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("portfolio").build()
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn asset_routes_serve_health_probe() {
    let dir = tempfile::tempdir().unwrap();
    let resp = asset_routes(dir.path(), Router::new()).oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn asset_routes_serve_files_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("DOA_Resume.pdf"), b"%PDF-1.4").unwrap();

    let resp = asset_routes(dir.path(), Router::new()).oneshot(get_request("/DOA_Resume.pdf")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn asset_routes_return_not_found_for_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let resp = asset_routes(dir.path(), Router::new()).oneshot(get_request("/missing.png")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missed_asset_uses_not_found_service_with_404() {
    let dir = tempfile::tempdir().unwrap();
    let not_found = Router::new().fallback(|| async { "custom miss" });

    let resp = asset_routes(dir.path(), not_found).oneshot(get_request("/gone.png")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "custom miss");
}

#[tokio::test]
async fn unknown_page_renders_not_found_view() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app(test_options(), dir.path()).oneshot(get_request("/no-such-page")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Page not found"));
}

#[tokio::test]
async fn static_file_wins_over_not_found_page() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("robots.txt"), b"User-agent: *").unwrap();

    let resp = app(test_options(), dir.path()).oneshot(get_request("/robots.txt")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "User-agent: *");
}
