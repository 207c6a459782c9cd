//! Pub/sub topic callback - the one fully implemented notification backend.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Map, Value};

use beacon_core::error::{BeaconError, BeaconResult};
use beacon_core::events::EventPayload;
use beacon_core::target::BackendKind;
use beacon_core::traits::{EventCallback, PubSubClient};

/// Callback that serializes lifecycle events into pub/sub messages.
///
/// The outgoing message starts from the bound context and is overlaid with
/// the reserved fields (`state`, `setupEventMetadata`, `stateSequence`,
/// `timestamp`, and the node fields when present); reserved fields win on
/// key collisions.
pub struct PubSubCallback {
    client: Arc<dyn PubSubClient>,
    target: String,
}

impl PubSubCallback {
    /// Create a callback publishing to `target` through `client`.
    pub fn new(client: Arc<dyn PubSubClient>, target: impl Into<String>) -> Self {
        Self {
            client,
            target: target.into(),
        }
    }

    /// Target identifier this callback publishes to.
    pub fn target(&self) -> &str {
        &self.target
    }

    fn build_message(
        &self,
        payload: &EventPayload,
        context: &HashMap<String, Value>,
    ) -> Map<String, Value> {
        let event = payload.event;
        // Copied so callers can reuse the payload for sibling bindings.
        let metadata = payload.metadata.clone();

        let mut message = Map::new();
        for (key, value) in context {
            message.insert(key.clone(), value.clone());
        }
        message.insert("state".to_string(), json!(event.name()));
        message.insert("setupEventMetadata".to_string(), json!(metadata));
        message.insert("stateSequence".to_string(), json!(event.sequence()));
        message.insert(
            "timestamp".to_string(),
            json!(Utc::now().timestamp_millis()),
        );

        if let Some(node) = &payload.node_context {
            message.insert("nodeId".to_string(), json!(node.node_id));
            message.insert(
                "nodeType".to_string(),
                json!(if node.is_head_node { "HEAD" } else { "WORKER" }),
            );
        }

        message
    }
}

impl EventCallback for PubSubCallback {
    fn backend(&self) -> BackendKind {
        BackendKind::PubSub
    }

    fn invoke(&self, payload: &EventPayload, context: &HashMap<String, Value>) -> BeaconResult<()> {
        let event = payload.event;
        let message = self.build_message(payload, context);
        let body = serde_json::to_string(&Value::Object(message))?;

        match self.client.publish(&self.target, &body) {
            Ok(()) => {
                tracing::info!("Published {} event to {}", event, self.target);
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to publish {} event to {}: {}", event, self.target, err);
                Err(BeaconError::delivery(event.name(), err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::events::{ClusterEvent, NodeContext};
    use beacon_core::traits::TransportError;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        Client {}
        impl PubSubClient for Client {
            fn publish(&self, target: &str, message: &str) -> Result<(), TransportError>;
        }
    }

    /// Transport double that records every publish call.
    #[derive(Default)]
    struct RecordingClient {
        published: Mutex<Vec<(String, String)>>,
    }

    impl RecordingClient {
        fn last_message(&self) -> Value {
            let published = self.published.lock().unwrap();
            let (_, body) = published.last().expect("no message published");
            serde_json::from_str(body).unwrap()
        }
    }

    impl PubSubClient for RecordingClient {
        fn publish(&self, target: &str, message: &str) -> Result<(), TransportError> {
            self.published
                .lock()
                .unwrap()
                .push((target.to_string(), message.to_string()));
            Ok(())
        }
    }

    fn invoke_with(
        payload: EventPayload,
        context: HashMap<String, Value>,
    ) -> (Arc<RecordingClient>, Value) {
        let client = Arc::new(RecordingClient::default());
        let callback = PubSubCallback::new(client.clone(), "pubsub:topic/alerts");
        callback.invoke(&payload, &context).unwrap();
        let message = client.last_message();
        (client, message)
    }

    #[test]
    fn test_message_carries_state_and_sequence() {
        let (_, message) = invoke_with(
            EventPayload::new(ClusterEvent::ScriptCompleted),
            HashMap::new(),
        );

        assert_eq!(message["state"], json!("ScriptCompleted"));
        assert_eq!(message["stateSequence"], json!(2));
        assert_eq!(message["setupEventMetadata"], json!({}));
        assert!(message["timestamp"].is_i64());
    }

    #[test]
    fn test_reserved_fields_overwrite_bound_context() {
        let mut context = HashMap::new();
        context.insert("state".to_string(), json!("overridden"));
        context.insert("team".to_string(), json!("infra"));

        let (_, message) = invoke_with(EventPayload::new(ClusterEvent::ScriptInProgress), context);

        assert_eq!(message["state"], json!("ScriptInProgress"));
        assert_eq!(message["team"], json!("infra"));
    }

    #[test]
    fn test_head_node_context() {
        let payload =
            EventPayload::new(ClusterEvent::ClusterCreateStarted).with_node_context(NodeContext {
                node_id: "i-0abc".to_string(),
                is_head_node: true,
            });
        let (_, message) = invoke_with(payload, HashMap::new());

        assert_eq!(message["nodeId"], json!("i-0abc"));
        assert_eq!(message["nodeType"], json!("HEAD"));
    }

    #[test]
    fn test_worker_node_context() {
        let payload =
            EventPayload::new(ClusterEvent::ClusterCreateStarted).with_node_context(NodeContext {
                node_id: "i-0def".to_string(),
                is_head_node: false,
            });
        let (_, message) = invoke_with(payload, HashMap::new());

        assert_eq!(message["nodeType"], json!("WORKER"));
    }

    #[test]
    fn test_absent_node_context_adds_no_node_fields() {
        let (_, message) = invoke_with(
            EventPayload::new(ClusterEvent::ScriptCompleted),
            HashMap::new(),
        );

        assert!(message.get("nodeId").is_none());
        assert!(message.get("nodeType").is_none());
    }

    #[test]
    fn test_metadata_becomes_setup_event_metadata() {
        let mut metadata = HashMap::new();
        metadata.insert("command".to_string(), json!("setup.sh"));
        let payload = EventPayload::new(ClusterEvent::ScriptInProgress).with_metadata(metadata);

        let (_, message) = invoke_with(payload, HashMap::new());

        assert_eq!(message["setupEventMetadata"], json!({"command": "setup.sh"}));
    }

    #[test]
    fn test_payload_is_not_consumed_by_invoke() {
        let mut metadata = HashMap::new();
        metadata.insert("command".to_string(), json!("setup.sh"));
        let payload = EventPayload::new(ClusterEvent::ScriptInProgress).with_metadata(metadata);

        let client = Arc::new(RecordingClient::default());
        let callback = PubSubCallback::new(client.clone(), "pubsub:topic/alerts");
        callback.invoke(&payload, &HashMap::new()).unwrap();
        callback.invoke(&payload, &HashMap::new()).unwrap();

        assert_eq!(payload.metadata.len(), 1);
        assert_eq!(client.published.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_publishes_to_configured_target() {
        let mut client = MockClient::new();
        client
            .expect_publish()
            .withf(|target, message| {
                target == "pubsub:topic/alerts" && message.contains("\"state\":\"ScriptCompleted\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let callback = PubSubCallback::new(Arc::new(client), "pubsub:topic/alerts");
        callback
            .invoke(
                &EventPayload::new(ClusterEvent::ScriptCompleted),
                &HashMap::new(),
            )
            .unwrap();
    }

    #[test]
    fn test_transport_failure_becomes_delivery_error() {
        let mut client = MockClient::new();
        client.expect_publish().returning(|_, _| {
            Err(TransportError::Client {
                code: "InvalidParameter".to_string(),
                message: "topic does not exist".to_string(),
            })
        });

        let callback = PubSubCallback::new(Arc::new(client), "pubsub:topic/missing");
        let err = callback
            .invoke(
                &EventPayload::new(ClusterEvent::ScriptCompleted),
                &HashMap::new(),
            )
            .unwrap_err();

        assert!(matches!(err, BeaconError::Delivery { .. }));
        let text = err.to_string();
        assert!(text.contains("ScriptCompleted"));
        assert!(text.contains("topic does not exist"));
    }
}
