//! Event callback trait implemented by notification backends.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::BeaconResult;
use crate::events::EventPayload;
use crate::target::BackendKind;

/// Core callback trait - every notification backend implements this.
///
/// `invoke` receives the dispatch payload together with the context the
/// binding was registered with. Backends without a working implementation
/// return an unsupported-backend error from `invoke`; `backend` lets callers
/// branch on the capability instead of catching that error.
pub trait EventCallback: Send + Sync {
    /// The delivery mechanism this callback represents.
    fn backend(&self) -> BackendKind;

    /// Deliver `payload` with the bound `context` merged in.
    fn invoke(&self, payload: &EventPayload, context: &HashMap<String, Value>) -> BeaconResult<()>;
}
