//! Axum HTTP API server.
//!
//! This crate provides:
//! - The `/analyze-image` upload endpoint backed by the Roboflow client
//! - Health check and Prometheus metrics endpoints
//! - Static frontend serving
//! - CORS, request-ID and request-logging middleware

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
