//! beacon-core - Core library for beacon.
//!
//! This crate provides the types, traits, and callback registry for the
//! beacon lifecycle-notification layer: a cluster orchestrator announces
//! lifecycle milestones, and a backend selected at configuration time
//! delivers them.
//!
//! # Example
//!
//! ```ignore
//! use beacon_core::{CallbackRegistry, ClusterEvent, EventPayload};
//!
//! let mut registry = CallbackRegistry::new();
//! registry.register(ClusterEvent::ScriptCompleted, handler, context);
//!
//! let payload = EventPayload::new(ClusterEvent::ScriptCompleted);
//! registry.execute(ClusterEvent::ScriptCompleted, &payload)?;
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod target;
pub mod traits;

// Re-export commonly used types
pub use config::NotificationConfig;
pub use error::{BeaconError, BeaconResult};
pub use events::{CallbackBinding, CallbackRegistry, ClusterEvent, EventPayload, NodeContext};
pub use target::{BackendKind, NotificationTarget, TargetUri};
pub use traits::{EventCallback, EventPublisher, PubSubClient, TransportError};
