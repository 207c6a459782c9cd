//! Error types for beacon operations.

use thiserror::Error;

/// Result type alias for beacon operations.
pub type BeaconResult<T> = Result<T, BeaconError>;

/// Main error type for all beacon operations.
#[derive(Error, Debug)]
pub enum BeaconError {
    /// Notification configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A backend was selected in configuration but has no implementation.
    ///
    /// Raised when the backend's callback is invoked, never at registration
    /// time, so "not yet built" stays distinguishable from "misconfigured".
    #[error("Notification backend not supported: {backend}")]
    UnsupportedBackend { backend: String },

    /// The transport client rejected or failed a publish call.
    #[error("Delivery error publishing {event} event: {message}")]
    Delivery {
        event: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BeaconError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a delivery error for `event` from a transport failure.
    pub fn delivery(
        event: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Delivery {
            event: event.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
