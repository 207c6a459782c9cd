//! beacon-notifiers - Notification backend implementations for beacon.
//!
//! This crate resolves a configured notification target to a concrete
//! delivery callback, registers it for every lifecycle event, and exposes
//! the publisher facade milestone producers call.
//!
//! # Supported Backends
//!
//! - **Pub/Sub** (`pubsub:`) - publish to a pub/sub topic
//! - **Function** (`function:`) - serverless invocation (stub)
//! - **Log stream** (`logstream:`) - log stream append (stub)
//! - **Gateway** (`gateway:`) - gateway endpoint call (stub)

mod function;
mod gateway;
mod logstream;
mod publisher;
mod pubsub;
mod resolver;

pub use function::FunctionCallback;
pub use gateway::GatewayCallback;
pub use logstream::LogStreamCallback;
pub use publisher::BeaconPublisher;
pub use pubsub::PubSubCallback;
pub use resolver::BackendResolver;

// Re-export core types
pub use beacon_core::traits::{EventCallback, EventPublisher, PubSubClient};
