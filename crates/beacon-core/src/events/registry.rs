//! Callback registry for lifecycle event fan-out.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::BeaconResult;
use crate::events::{ClusterEvent, EventPayload};
use crate::traits::EventCallback;

/// One registered (handler, bound context) pair.
///
/// Created at registration time, lives for the registry's lifetime; there is
/// no unregister operation.
#[derive(Clone)]
pub struct CallbackBinding {
    handler: Arc<dyn EventCallback>,
    context: HashMap<String, Value>,
}

impl CallbackBinding {
    /// Context merged into every message this handler produces.
    pub fn context(&self) -> &HashMap<String, Value> {
        &self.context
    }
}

impl std::fmt::Debug for CallbackBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackBinding")
            .field("handler", &self.handler.backend())
            .field("context", &self.context)
            .finish()
    }
}

/// Registry mapping each lifecycle event to its ordered callback bindings.
///
/// Populated during publisher construction and read-only afterwards; callers
/// hold their own instance rather than reaching a process-wide global.
/// Registration order is execution order.
#[derive(Debug)]
pub struct CallbackRegistry {
    bindings: HashMap<ClusterEvent, Vec<CallbackBinding>>,
}

impl CallbackRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Append a binding for `event`.
    ///
    /// Never fails and never deduplicates: registering the same handler twice
    /// adds a second binding, and both run on dispatch.
    pub fn register(
        &mut self,
        event: ClusterEvent,
        handler: Arc<dyn EventCallback>,
        context: HashMap<String, Value>,
    ) {
        self.bindings
            .entry(event)
            .or_default()
            .push(CallbackBinding { handler, context });
    }

    /// Invoke every handler bound to `event`, in registration order.
    ///
    /// Handler failures are not isolated: the first error propagates
    /// immediately and bindings registered after the failing one do not run
    /// in that dispatch. An event with no bindings is a no-op.
    pub fn execute(&self, event: ClusterEvent, payload: &EventPayload) -> BeaconResult<()> {
        let Some(bindings) = self.bindings.get(&event) else {
            return Ok(());
        };

        tracing::debug!("Dispatching {} event to {} handlers", event, bindings.len());

        for binding in bindings {
            binding.handler.invoke(payload, &binding.context)?;
        }
        Ok(())
    }

    /// Bindings registered for `event`, in registration order.
    pub fn bindings(&self, event: ClusterEvent) -> &[CallbackBinding] {
        self.bindings.get(&event).map_or(&[], Vec::as_slice)
    }

    /// Number of bindings registered for `event`.
    pub fn binding_count(&self, event: ClusterEvent) -> usize {
        self.bindings(event).len()
    }

    /// True when no event has any binding.
    pub fn is_empty(&self) -> bool {
        self.bindings.values().all(Vec::is_empty)
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeaconError;
    use crate::target::BackendKind;
    use std::sync::Mutex;

    struct RecordingCallback {
        label: &'static str,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl EventCallback for RecordingCallback {
        fn backend(&self) -> BackendKind {
            BackendKind::PubSub
        }

        fn invoke(
            &self,
            payload: &EventPayload,
            _context: &HashMap<String, Value>,
        ) -> BeaconResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.label, payload.event));
            Ok(())
        }
    }

    struct FailingCallback;

    impl EventCallback for FailingCallback {
        fn backend(&self) -> BackendKind {
            BackendKind::Function
        }

        fn invoke(
            &self,
            _payload: &EventPayload,
            _context: &HashMap<String, Value>,
        ) -> BeaconResult<()> {
            Err(BeaconError::UnsupportedBackend {
                backend: self.backend().to_string(),
            })
        }
    }

    #[test]
    fn test_execute_runs_handlers_in_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CallbackRegistry::new();
        for label in ["first", "second", "third"] {
            registry.register(
                ClusterEvent::ScriptCompleted,
                Arc::new(RecordingCallback {
                    label,
                    calls: calls.clone(),
                }),
                HashMap::new(),
            );
        }

        registry
            .execute(
                ClusterEvent::ScriptCompleted,
                &EventPayload::new(ClusterEvent::ScriptCompleted),
            )
            .unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                "first:ScriptCompleted",
                "second:ScriptCompleted",
                "third:ScriptCompleted"
            ]
        );
    }

    #[test]
    fn test_execute_without_bindings_is_a_noop() {
        let registry = CallbackRegistry::new();
        registry
            .execute(
                ClusterEvent::ScriptInProgress,
                &EventPayload::new(ClusterEvent::ScriptInProgress),
            )
            .unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_handler_failure_stops_later_handlers() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CallbackRegistry::new();
        registry.register(
            ClusterEvent::ScriptCompleted,
            Arc::new(FailingCallback),
            HashMap::new(),
        );
        registry.register(
            ClusterEvent::ScriptCompleted,
            Arc::new(RecordingCallback {
                label: "after",
                calls: calls.clone(),
            }),
            HashMap::new(),
        );

        let err = registry
            .execute(
                ClusterEvent::ScriptCompleted,
                &EventPayload::new(ClusterEvent::ScriptCompleted),
            )
            .unwrap_err();

        assert!(matches!(err, BeaconError::UnsupportedBackend { .. }));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_registration_adds_bindings() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CallbackRegistry::new();
        for _ in 0..2 {
            registry.register(
                ClusterEvent::ClusterCreateStarted,
                Arc::new(RecordingCallback {
                    label: "dup",
                    calls: calls.clone(),
                }),
                HashMap::new(),
            );
        }

        assert_eq!(registry.binding_count(ClusterEvent::ClusterCreateStarted), 2);
        registry
            .execute(
                ClusterEvent::ClusterCreateStarted,
                &EventPayload::new(ClusterEvent::ClusterCreateStarted),
            )
            .unwrap();
        assert_eq!(calls.lock().unwrap().len(), 2);
    }
}
