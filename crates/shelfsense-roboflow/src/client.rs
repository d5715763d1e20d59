//! Roboflow hosted inference client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use shelfsense_models::Detection;

use crate::error::{RoboflowError, RoboflowResult};

/// Default hosted inference endpoint.
const DEFAULT_BASE_URL: &str = "https://detect.roboflow.com";

/// Default model identifier (project/version).
const DEFAULT_MODEL_ID: &str = "retail-store-detection-cv-p6zlc/4";

/// Maximum upstream body length kept in error messages.
const ERROR_BODY_EXCERPT_LEN: usize = 512;

/// Roboflow client configuration.
#[derive(Debug, Clone)]
pub struct RoboflowConfig {
    /// API key for the hosted inference endpoint
    pub api_key: String,
    /// Model identifier, `project/version`
    pub model_id: String,
    /// Inference endpoint base URL
    pub base_url: String,
    /// Minimum confidence filter applied by the upstream API
    pub confidence: f64,
    /// Overlap filter applied by the upstream API
    pub overlap: f64,
    /// Request timeout
    pub timeout: Duration,
}

impl RoboflowConfig {
    /// Create config from environment variables.
    ///
    /// `ROBOFLOW_API_KEY` is required; the key is never hard-coded.
    pub fn from_env() -> RoboflowResult<Self> {
        let api_key = std::env::var("ROBOFLOW_API_KEY")
            .map_err(|_| RoboflowError::Config("ROBOFLOW_API_KEY not set".to_string()))?;

        Ok(Self {
            api_key,
            model_id: std::env::var("ROBOFLOW_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            base_url: std::env::var("ROBOFLOW_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            confidence: 0.4,
            overlap: 0.3,
            timeout: Duration::from_secs(20),
        })
    }
}

/// JSON body returned by the inference endpoint.
#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    predictions: Vec<Detection>,
}

/// Client for the Roboflow hosted object-detection API.
#[derive(Debug, Clone)]
pub struct RoboflowClient {
    config: RoboflowConfig,
    client: Client,
}

impl RoboflowClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RoboflowConfig) -> RoboflowResult<Self> {
        if config.api_key.is_empty() {
            return Err(RoboflowError::Config("API key is empty".to_string()));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    /// Create a client configured from environment variables.
    pub fn from_env() -> RoboflowResult<Self> {
        Self::new(RoboflowConfig::from_env()?)
    }

    /// Model identifier this client queries.
    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    /// Run object detection on a raw image.
    ///
    /// The image is sent base64-encoded as a form-urlencoded body, with the
    /// confidence and overlap filters passed as query parameters so they are
    /// applied upstream. Returns the prediction list in upstream order.
    pub async fn detect(&self, image: &[u8]) -> RoboflowResult<Vec<Detection>> {
        let encoded = BASE64.encode(image);
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model_id
        );

        debug!(
            model = %self.config.model_id,
            image_bytes = image.len(),
            "Sending image to Roboflow"
        );

        let confidence = self.config.confidence.to_string();
        let overlap = self.config.overlap.to_string();

        let response = self
            .client
            .post(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("confidence", confidence.as_str()),
                ("overlap", overlap.as_str()),
            ])
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(encoded)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RoboflowError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let decoded: DetectResponse = serde_json::from_str(&body)?;
        info!(
            model = %self.config.model_id,
            predictions = decoded.predictions.len(),
            "Roboflow returned predictions"
        );

        Ok(decoded.predictions)
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= ERROR_BODY_EXCERPT_LEN {
        body.to_string()
    } else {
        let mut end = ERROR_BODY_EXCERPT_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body[..end].to_string()
    }
}
