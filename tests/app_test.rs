mod common;

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use common::{json_body, TestApp};

#[allow(dead_code)]
fn assert_app_state_bounds() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<catalog_api::AppState>();
}

#[tokio::test]
async fn root_reports_liveness() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Catalog API is running"})
    );
}

#[tokio::test]
async fn health_reports_database_up() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"], "up");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = TestApp::new().await;

    let ok = app.request(Method::GET, "/categories/", None).await;
    assert!(ok.headers().contains_key("x-request-id"));

    let missing = app.request(Method::GET, "/products/31337", None).await;
    let header_id = missing
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-request-id header");
    let body = json_body(missing).await;
    assert_eq!(body["request_id"], header_id.as_str());
}

#[tokio::test]
async fn inbound_request_id_is_propagated_into_error_bodies() {
    let app = TestApp::new().await;
    let response = app
        .request_with_headers(
            Method::DELETE,
            "/categories/5",
            None,
            &[("x-request-id", "trace-me-123")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
    assert_eq!(json_body(response).await["request_id"], "trace-me-123");
}

#[tokio::test]
async fn cors_allows_configured_origin_with_credentials() {
    let app = TestApp::new().await;
    let response = app
        .request_with_headers(
            Method::OPTIONS,
            "/products/",
            None,
            &[
                ("origin", "http://localhost:5173"),
                ("access-control-request-method", "PUT"),
                ("access-control-request-headers", "content-type"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "PUT");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn cors_ignores_unknown_origin() {
    let app = TestApp::new().await;
    let response = app
        .request_with_headers(
            Method::GET,
            "/categories/",
            None,
            &[("origin", "https://evil.example.com")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;
    let response = app
        .request(Method::GET, "/api-docs/openapi.json", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert!(doc["paths"].get("/categories/{id}").is_some());
    assert!(doc["paths"].get("/products/").is_some());
}
