//! Cluster lifecycle event catalog.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Lifecycle milestones a cluster orchestrator announces.
///
/// Discriminants are stable ranks used for sequencing. The zero-indexed
/// sequence number reported to notification backends is `rank - 1`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ClusterEvent {
    /// Cluster creation has started.
    ClusterCreateStarted = 1,
    /// The setup script is running on the cluster.
    ScriptInProgress = 2,
    /// The setup script finished.
    ScriptCompleted = 3,
}

impl ClusterEvent {
    /// Stable integer rank of this event within the catalog.
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// Zero-indexed sequence number derived from the rank.
    pub fn sequence(&self) -> u32 {
        self.rank() - 1
    }

    /// Display name of this event.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Returns the full catalog in rank order.
    pub fn all() -> Vec<ClusterEvent> {
        Self::iter().collect()
    }
}
