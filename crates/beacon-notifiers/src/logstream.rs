//! Log stream append callback (not yet implemented).

use std::collections::HashMap;

use serde_json::Value;

use beacon_core::error::{BeaconError, BeaconResult};
use beacon_core::events::EventPayload;
use beacon_core::target::BackendKind;
use beacon_core::traits::EventCallback;

/// Placeholder callback for the `logstream:` backend.
///
/// Registration succeeds; dispatch fails with an explicit
/// unsupported-backend error.
pub struct LogStreamCallback {
    #[allow(dead_code)]
    resource: String,
}

impl LogStreamCallback {
    /// Create a callback for the log stream named by `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

impl EventCallback for LogStreamCallback {
    fn backend(&self) -> BackendKind {
        BackendKind::LogStream
    }

    fn invoke(
        &self,
        _payload: &EventPayload,
        _context: &HashMap<String, Value>,
    ) -> BeaconResult<()> {
        Err(BeaconError::UnsupportedBackend {
            backend: BackendKind::LogStream.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::events::ClusterEvent;

    #[test]
    fn test_invoke_is_unsupported() {
        let callback = LogStreamCallback::new("cluster-setup");
        let err = callback
            .invoke(
                &EventPayload::new(ClusterEvent::ScriptInProgress),
                &HashMap::new(),
            )
            .unwrap_err();
        assert!(matches!(err, BeaconError::UnsupportedBackend { .. }));
    }
}
