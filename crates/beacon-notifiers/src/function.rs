//! Serverless function invocation callback (not yet implemented).

use std::collections::HashMap;

use serde_json::Value;

use beacon_core::error::{BeaconError, BeaconResult};
use beacon_core::events::EventPayload;
use beacon_core::target::BackendKind;
use beacon_core::traits::EventCallback;

/// Placeholder callback for the `function:` backend.
///
/// Selecting this backend in configuration succeeds and registers normally;
/// every dispatch fails with an explicit unsupported-backend error until an
/// implementation lands.
pub struct FunctionCallback {
    #[allow(dead_code)]
    resource: String,
}

impl FunctionCallback {
    /// Create a callback for the function named by `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

impl EventCallback for FunctionCallback {
    fn backend(&self) -> BackendKind {
        BackendKind::Function
    }

    fn invoke(
        &self,
        _payload: &EventPayload,
        _context: &HashMap<String, Value>,
    ) -> BeaconResult<()> {
        Err(BeaconError::UnsupportedBackend {
            backend: BackendKind::Function.to_string(),
        })
    }
}
