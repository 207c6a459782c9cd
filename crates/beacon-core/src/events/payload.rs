//! Payload types carried through callback dispatch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::events::ClusterEvent;

/// Identity of the node a lifecycle event relates to.
///
/// Produced by the caller triggering the event and passed by value inside the
/// payload; the dispatch layer does not retain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeContext {
    /// Provider-assigned node identifier.
    pub node_id: String,
    /// Whether the node is the head node of the cluster.
    pub is_head_node: bool,
}

/// Payload handed to every callback bound to an event.
///
/// Handlers receive the payload by shared reference and copy what they keep,
/// so one payload can be reused across sibling bindings. `metadata` is
/// free-form and travels into the outbound message as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    /// The triggering event.
    pub event: ClusterEvent,
    /// Node the event relates to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_context: Option<NodeContext>,
    /// Free-form event metadata.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl EventPayload {
    /// Create a payload for `event` with no node association and no metadata.
    pub fn new(event: ClusterEvent) -> Self {
        Self {
            event,
            node_context: None,
            metadata: HashMap::new(),
        }
    }

    /// Builder: associate the payload with a node.
    pub fn with_node_context(mut self, node_context: NodeContext) -> Self {
        self.node_context = Some(node_context);
        self
    }

    /// Builder: attach free-form metadata.
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}
