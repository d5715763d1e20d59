//! Application state.

use std::sync::Arc;

use shelfsense_roboflow::RoboflowClient;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub roboflow: Arc<RoboflowClient>,
}

impl AppState {
    /// Create new application state.
    ///
    /// The Roboflow client is configured from the environment; a missing
    /// API key fails startup rather than the first request.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let roboflow = RoboflowClient::from_env()?;

        Ok(Self {
            config,
            roboflow: Arc::new(roboflow),
        })
    }

    /// Create state with an explicit Roboflow client (used by tests).
    pub fn with_client(config: ApiConfig, roboflow: RoboflowClient) -> Self {
        Self {
            config,
            roboflow: Arc::new(roboflow),
        }
    }
}
