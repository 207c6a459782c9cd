//! Transport client boundary for pub/sub delivery.

use thiserror::Error;

/// Error type for transport publish failures.
///
/// Structured so callers can tell a backend-classified rejection apart from
/// a connection-level failure (and from generic errors).
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The backend classified and rejected the publish call.
    #[error("client error {code}: {message}")]
    Client { code: String, message: String },

    /// The backend could not be reached.
    #[error("connection error: {0}")]
    Connection(String),
}

/// Minimal pub/sub transport primitive the subsystem publishes through.
///
/// Synchronous by design: `publish` is called on the dispatching thread, so
/// a slow or hanging backend call blocks the lifecycle-reporting path. There
/// is no timeout or cancellation at this layer.
pub trait PubSubClient: Send + Sync {
    /// Publish a serialized message to `target`.
    fn publish(&self, target: &str, message: &str) -> Result<(), TransportError>;
}
