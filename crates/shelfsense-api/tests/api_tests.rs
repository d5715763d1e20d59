//! API integration tests.
//!
//! The router is exercised end to end with `tower::ServiceExt::oneshot`,
//! with the Roboflow endpoint replaced by a wiremock server.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelfsense_api::{create_router, ApiConfig, AppState};
use shelfsense_roboflow::{RoboflowClient, RoboflowConfig};

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn test_app(upstream_url: String) -> Router {
    let config = ApiConfig::default();
    let roboflow = RoboflowClient::new(RoboflowConfig {
        api_key: "test-key".to_string(),
        model_id: "retail-test/1".to_string(),
        base_url: upstream_url,
        confidence: 0.4,
        overlap: 0.3,
        timeout: Duration::from_secs(5),
    })
    .unwrap();

    create_router(AppState::with_client(config, roboflow), None)
}

fn multipart_upload(field_name: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field_name}\"; filename=\"shelf.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\n\
         fake-image-bytes\r\n\
         --{BOUNDARY}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri("/analyze-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_reports_model() {
    let app = test_app("http://localhost:9".to_string());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"], "retail-test/1");
}

#[tokio::test]
async fn test_analyze_image_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "predictions": [
                {"class": "Empty Gap", "confidence": 0.9, "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0},
                {"class": "Soda Can", "confidence": 0.8, "x": 5.0, "y": 6.0, "width": 7.0, "height": 8.0}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(server.uri());
    let response = app.oneshot(multipart_upload("file")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert_eq!(body["status"], "success");
    assert_eq!(body["summary"]["total_products_detected"], 1);
    assert_eq!(body["summary"]["total_missing_detected"], 1);
    assert_eq!(body["details"][0]["class"], "missing");
    assert_eq!(body["details"][0]["x"], 1.0);
    assert_eq!(body["details"][1]["class"], "product");
    assert_eq!(body["business_mapping"]["restock_required"], true);
    assert_eq!(body["business_mapping"]["severity"], "low");
}

#[tokio::test]
async fn test_analyze_image_empty_predictions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "predictions": []
        })))
        .mount(&server)
        .await;

    let app = test_app(server.uri());
    let response = app.oneshot(multipart_upload("file")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["summary"]["total_products_detected"], 0);
    assert_eq!(body["summary"]["total_missing_detected"], 0);
    assert_eq!(body["details"], serde_json::json!([]));
    assert_eq!(body["business_mapping"]["restock_required"], false);
    assert_eq!(body["business_mapping"]["severity"], "none");
}

#[tokio::test]
async fn test_analyze_image_upstream_failure_returns_500() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let app = test_app(server.uri());
    let response = app.oneshot(multipart_upload("file")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["detail"].is_string());
    assert!(body["detail"].as_str().unwrap().contains("502"));
}

#[tokio::test]
async fn test_analyze_image_missing_file_field() {
    let app = test_app("http://localhost:9".to_string());
    let response = app.oneshot(multipart_upload("not-file")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_frontend_fallback_when_index_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = ApiConfig {
        frontend_dir: dir.path().join("nonexistent"),
        ..ApiConfig::default()
    };
    let roboflow = RoboflowClient::new(RoboflowConfig {
        api_key: "test-key".to_string(),
        model_id: "retail-test/1".to_string(),
        base_url: "http://localhost:9".to_string(),
        confidence: 0.4,
        overlap: 0.3,
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    let app = create_router(AppState::with_client(config, roboflow), None);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_frontend_serves_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>ShelfSense</html>").unwrap();

    let config = ApiConfig {
        frontend_dir: dir.path().to_path_buf(),
        ..ApiConfig::default()
    };
    let roboflow = RoboflowClient::new(RoboflowConfig {
        api_key: "test-key".to_string(),
        model_id: "retail-test/1".to_string(),
        base_url: "http://localhost:9".to_string(),
        confidence: 0.4,
        overlap: 0.3,
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    let app = create_router(AppState::with_client(config, roboflow), None);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("ShelfSense"));
}
