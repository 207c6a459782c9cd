//! Trait seams between the dispatch core and its collaborators.

mod callback;
mod publisher;
mod transport;

pub use callback::EventCallback;
pub use publisher::EventPublisher;
pub use transport::{PubSubClient, TransportError};
