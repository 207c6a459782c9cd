//! Gateway endpoint callback (not yet implemented).

use std::collections::HashMap;

use serde_json::Value;

use beacon_core::error::{BeaconError, BeaconResult};
use beacon_core::events::EventPayload;
use beacon_core::target::BackendKind;
use beacon_core::traits::EventCallback;

/// Placeholder callback for the `gateway:` backend.
///
/// Registration succeeds; dispatch fails with an explicit
/// unsupported-backend error.
pub struct GatewayCallback {
    #[allow(dead_code)]
    resource: String,
}

impl GatewayCallback {
    /// Create a callback for the gateway endpoint named by `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

impl EventCallback for GatewayCallback {
    fn backend(&self) -> BackendKind {
        BackendKind::Gateway
    }

    fn invoke(
        &self,
        _payload: &EventPayload,
        _context: &HashMap<String, Value>,
    ) -> BeaconResult<()> {
        Err(BeaconError::UnsupportedBackend {
            backend: BackendKind::Gateway.to_string(),
        })
    }
}
