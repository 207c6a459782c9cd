//! Configuration for the notification subsystem.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{BeaconError, BeaconResult};

/// Notification configuration block supplied by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Scheme-prefixed resource identifier naming the delivery backend.
    pub notification_uri: String,
    /// Extra parameters merged into every outgoing message.
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
}

impl NotificationConfig {
    /// Create a configuration with no extra parameters.
    pub fn new(notification_uri: impl Into<String>) -> Self {
        Self {
            notification_uri: notification_uri.into(),
            parameters: HashMap::new(),
        }
    }

    /// Builder: set the extra parameters.
    pub fn with_parameters(mut self, parameters: HashMap<String, serde_json::Value>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> BeaconResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| BeaconError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| BeaconError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| BeaconError::Configuration(e.to_string())),
            _ => Err(BeaconError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }
}
