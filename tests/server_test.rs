use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use formsmith::config::{EditorSettings, ServerSettings, Settings};
use serde_json::Value;
use tower::util::ServiceExt;

fn test_settings(debounce_ms: u64) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        editor: EditorSettings { debounce_ms },
    }
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = formsmith::create_app(test_settings(300));
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].is_number());
    assert!(body["version"].is_string());
    assert!(body["ui_bundled"].is_boolean());
}

#[tokio::test]
async fn test_editor_settings_endpoint() {
    let app = formsmith::create_app(test_settings(125));
    let (status, body) = get_json(app, "/api/settings/editor").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["debounce_ms"], 125);
}

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let app = formsmith::create_app(test_settings(300));
    let request = Request::builder()
        .uri("/definitely-not-here.wasm")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_serves_ui_when_bundled() {
    let app = formsmith::create_app(test_settings(300));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    // 404 when the binary was built before `trunk build`
    if formsmith::adapters::ui_handler::UIHandler::is_bundled() {
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/html");
    } else {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
