//! Publisher facade wiring configuration, resolver, and registry together.

use std::sync::Arc;

use beacon_core::config::NotificationConfig;
use beacon_core::error::BeaconResult;
use beacon_core::events::{CallbackRegistry, ClusterEvent, EventPayload};
use beacon_core::target::NotificationTarget;
use beacon_core::traits::{EventPublisher, PubSubClient};

use crate::resolver::BackendResolver;

/// Facade lifecycle-milestone producers publish through.
///
/// Construction is eager: the notification target is validated, the resolver
/// built, and a callback registered for every catalog event before the first
/// publish. Each publisher owns its registry, so a second publisher for the
/// same target gets its own bindings rather than replacing existing ones.
#[derive(Debug)]
pub struct BeaconPublisher {
    registry: CallbackRegistry,
}

impl BeaconPublisher {
    /// Build a publisher from configuration and a transport client.
    ///
    /// Fails with a configuration error when the notification identifier is
    /// missing or malformed; nothing is registered in that case.
    pub fn new(config: NotificationConfig, client: Arc<dyn PubSubClient>) -> BeaconResult<Self> {
        let target = NotificationTarget::from_config(&config)?;
        let resolver = BackendResolver::new(target, client);
        let mut registry = CallbackRegistry::new();
        resolver.register_all(&mut registry, ClusterEvent::all());
        Ok(Self { registry })
    }

    /// Dispatch a payload through every handler bound to its event.
    pub fn publish_payload(&self, trace_id: &str, payload: EventPayload) -> BeaconResult<()> {
        tracing::debug!("Publishing {} event, trace {}", payload.event, trace_id);
        self.registry.execute(payload.event, &payload)
    }

    /// The registry backing this publisher, mainly for diagnostics.
    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }
}

impl EventPublisher for BeaconPublisher {
    fn publish(&self, trace_id: &str, event: ClusterEvent) -> BeaconResult<()> {
        self.publish_payload(trace_id, EventPayload::new(event))
    }
}
