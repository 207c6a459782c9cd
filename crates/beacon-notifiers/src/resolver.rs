//! Resolves a notification target to concrete callback registrations.

use std::sync::Arc;

use beacon_core::events::{CallbackRegistry, ClusterEvent};
use beacon_core::target::{BackendKind, NotificationTarget};
use beacon_core::traits::{EventCallback, PubSubClient};

use crate::function::FunctionCallback;
use crate::gateway::GatewayCallback;
use crate::logstream::LogStreamCallback;
use crate::pubsub::PubSubCallback;

/// Binds the callback matching a target's backend kind to catalog events.
///
/// Construction performs no registration; `register_all` walks the catalog
/// once and appends one binding per event, with the target's parameters as
/// the bound context. A well-formed identifier whose scheme matches no
/// backend registers nothing.
pub struct BackendResolver {
    target: NotificationTarget,
    client: Arc<dyn PubSubClient>,
}

impl BackendResolver {
    /// Create a resolver for `target` publishing through `client`.
    pub fn new(target: NotificationTarget, client: Arc<dyn PubSubClient>) -> Self {
        Self { target, client }
    }

    /// Register the matching callback for every event in `catalog`.
    pub fn register_all(
        &self,
        registry: &mut CallbackRegistry,
        catalog: impl IntoIterator<Item = ClusterEvent>,
    ) {
        let Some(kind) = self.target.uri().kind() else {
            tracing::warn!(
                "No notification backend matches scheme {}; target {} registers no handlers",
                self.target.uri().scheme(),
                self.target.uri()
            );
            return;
        };

        for event in catalog {
            registry.register(
                event,
                self.make_callback(kind),
                self.target.parameters().clone(),
            );
            tracing::info!("Added {} callback handler for event {}", kind, event);
        }
    }

    fn make_callback(&self, kind: BackendKind) -> Arc<dyn EventCallback> {
        match kind {
            BackendKind::PubSub => Arc::new(PubSubCallback::new(
                self.client.clone(),
                self.target.uri().as_str(),
            )),
            BackendKind::Function => {
                Arc::new(FunctionCallback::new(self.target.uri().resource()))
            }
            BackendKind::LogStream => {
                Arc::new(LogStreamCallback::new(self.target.uri().resource()))
            }
            BackendKind::Gateway => Arc::new(GatewayCallback::new(self.target.uri().resource())),
        }
    }
}
