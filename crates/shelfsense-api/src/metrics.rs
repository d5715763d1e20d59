//! Prometheus metrics for the API server.

use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "shelfsense_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "shelfsense_http_request_duration_seconds";

    // Analysis metrics
    pub const ANALYSES_TOTAL: &str = "shelfsense_analyses_total";
    pub const DETECTIONS_TOTAL: &str = "shelfsense_detections_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a completed shelf analysis.
pub fn record_analysis(product_count: u32, missing_count: u32) {
    counter!(names::ANALYSES_TOTAL).increment(1);
    counter!(names::DETECTIONS_TOTAL, &[("category", "product".to_string())])
        .increment(product_count as u64);
    counter!(names::DETECTIONS_TOTAL, &[("category", "missing".to_string())])
        .increment(missing_count as u64);
}

/// HTTP metrics middleware.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
