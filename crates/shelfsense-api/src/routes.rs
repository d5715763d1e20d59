//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;

use crate::handlers::analyze::analyze_image;
use crate::handlers::frontend::serve_frontend;
use crate::handlers::health::health;
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::metrics::metrics_middleware;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/analyze-image", post(analyze_image));

    // Static frontend: index.html at the root, sample images under /images
    let frontend_routes = Router::new()
        .route("/", get(serve_frontend))
        .nest_service("/images", ServeDir::new(state.config.images_dir.clone()));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    Router::new()
        .merge(api_routes)
        .merge(frontend_routes)
        .merge(metrics_routes)
        // Uploads are capped at the configured body size
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
