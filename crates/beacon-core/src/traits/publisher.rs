//! Publisher contract for lifecycle-milestone producers.

use crate::error::BeaconResult;
use crate::events::ClusterEvent;

/// Interface lifecycle-milestone producers publish through.
pub trait EventPublisher: Send + Sync {
    /// Announce `event` to every handler bound to it.
    ///
    /// `trace_id` is accepted for correlation; delivery backends do not
    /// currently include it in outgoing messages.
    fn publish(&self, trace_id: &str, event: ClusterEvent) -> BeaconResult<()>;
}
