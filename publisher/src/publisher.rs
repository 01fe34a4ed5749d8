use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use inspector_common::traits::Notifiable;
use inspector_common::types::Callback;

use crate::PublisherError;

/// Record of registered listeners that will be notified of updates.
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, Callback<T>>>,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Publisher<T> {
    /// Creates a new `Publisher` instance with no registered listeners.
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
        }
    }
}

impl<T> Publisher<T>
where
    T: Send + Sync + 'static,
{
    /// Registers a listener callback to be notified of updates and returns
    /// its id.
    pub fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid {
        let callback = listener.callback();
        let listener_id = Uuid::new_v4();
        listener.set_id(listener_id);
        self.listeners.insert(listener_id, callback);
        listener_id
    }

    /// Unregisters the listener callback with the given id.
    pub fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError> {
        self.listeners
            .remove(&listener_id)
            .map(|_| ())
            .ok_or_else(|| {
                PublisherError::ListenerNotFound(format!(
                    "Listener with id {} not found",
                    listener_id
                ))
            })
    }

    /// Unregisters every listener callback.
    pub fn unregister_all(&self) {
        self.listeners.clear();
    }

    /// Calls each registered listener with the provided data, awaiting each
    /// callback in turn so a listener observes deliveries in order.
    pub async fn notify_listeners(&self, data: Arc<T>) {
        let callbacks: Vec<(Uuid, Callback<T>)> = self
            .listeners
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        for (id, callback) in callbacks {
            callback(id, Arc::clone(&data)).await;
        }
    }

    // Returns true if no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    // Returns the number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}
