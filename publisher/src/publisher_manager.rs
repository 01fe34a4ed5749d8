use dashmap::DashMap;
use std::cmp::Eq;
use std::hash::Hash;
use std::sync::Arc;
use uuid::Uuid;

use inspector_common::traits::Notifiable;

use crate::publisher::Publisher;
use crate::PublisherError;

/// Keeps one [`Publisher`] per key and routes listener registration,
/// removal, and notification by key. A `control` map from listener id to
/// key makes removal possible without knowing where a listener was added.
pub struct PublisherManager<T, K> {
    publishers: Arc<DashMap<K, Publisher<T>>>,
    control: Arc<DashMap<Uuid, K>>,
}

impl<T, K> Clone for PublisherManager<T, K>
where
    K: Hash + Eq,
{
    fn clone(&self) -> Self {
        Self {
            publishers: Arc::clone(&self.publishers),
            control: Arc::clone(&self.control),
        }
    }
}

impl<T, K> PublisherManager<T, K>
where
    T: Send + Sync + 'static,
    K: Send + Sync + Hash + Eq + Copy + Into<usize>,
{
    /// Creates a manager with one publisher per key. Duplicate keys collapse
    /// into a single publisher.
    pub fn new(keys: &[K]) -> Self {
        let publishers = DashMap::new();
        for key in keys {
            publishers.insert(*key, Publisher::new());
        }

        Self {
            publishers: Arc::new(publishers),
            control: Arc::new(DashMap::new()),
        }
    }

    /// Returns the keys with a publisher, sorted by their index.
    pub fn available_keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.publishers.iter().map(|entry| *entry.key()).collect();
        keys.sort_by_key(|key| (*key).into());
        keys
    }

    /// Registers `listener` with the publisher for `key` and returns its id.
    pub fn add_listener(
        &self,
        listener: &mut dyn Notifiable<T>,
        key: &K,
    ) -> Result<Uuid, PublisherError> {
        let publisher = self.publishers.get(key).ok_or_else(|| {
            PublisherError::UnknownPublisher("No publisher for the given key".to_string())
        })?;
        let id = publisher.register_listener(listener);
        self.control.insert(id, *key);
        Ok(id)
    }

    /// Removes the listener with the given id from its publisher.
    pub fn remove_listener(&self, id: Uuid) -> Result<(), PublisherError> {
        let (_, key) = self.control.remove(&id).ok_or_else(|| {
            PublisherError::ListenerNotFound(format!("Listener with id {} not found", id))
        })?;
        match self.publishers.get(&key) {
            Some(publisher) => publisher.unregister_listener(id),
            None => Err(PublisherError::UnknownPublisher(
                "No publisher for the given key".to_string(),
            )),
        }
    }

    /// Delivers `data` to every listener registered for `key`.
    pub async fn notify_listeners(&self, key: K, data: Arc<T>) {
        // clone the publisher handle out so no map guard is held across await
        let publisher = self.publishers.get(&key).map(|entry| entry.value().clone());
        if let Some(publisher) = publisher {
            publisher.notify_listeners(data).await;
        }
    }
}
