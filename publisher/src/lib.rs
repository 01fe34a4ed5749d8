//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying
//! listeners of new events of type `T`, grouped under keys (one publisher
//! per sensor kind in this workspace).
//!
//! Registration and removal are synchronous; notification is asynchronous
//! and awaits each callback in turn, so a listener observes deliveries in
//! the order they were published.
//!
//! ### Example
//!
//! ```ignore
//! let manager = PublisherManager::new(&SensorKind::ALL);
//!
//! // Register a listener for one kind
//! let mut listener = Listener::new(|_id, reading: Arc<Reading>| async move {
//!     println!("received: {:?}", reading);
//! });
//! let id = manager.add_listener(&mut listener, &SensorKind::Proximity)?;
//!
//! // Deliver a reading to every listener of that kind
//! manager.notify_listeners(SensorKind::Proximity, Arc::new(reading)).await;
//!
//! // Remove the listener
//! manager.remove_listener(id)?;
//! ```

use std::error::Error;
use std::fmt;

pub mod listener;
mod macros;
pub mod publisher;
pub mod publisher_manager;

pub use crate::listener::Listener;
pub use crate::publisher::Publisher;
pub use crate::publisher_manager::PublisherManager;

/// Errors reported by the listener registry.
#[derive(PartialEq, Clone, Debug)]
pub enum PublisherError {
    /// No listener is registered under the given id.
    ListenerNotFound(String),
    /// No publisher exists for the given key.
    UnknownPublisher(String),
}

impl fmt::Display for PublisherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublisherError::ListenerNotFound(msg) => write!(f, "listener not found: {}", msg),
            PublisherError::UnknownPublisher(msg) => write!(f, "unknown publisher: {}", msg),
        }
    }
}

impl Error for PublisherError {}
