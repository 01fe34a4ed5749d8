use uuid::Uuid;

use crate::types::callback::Callback;

/// A handler that can be registered with a publisher and notified of new
/// values of type `T`.
pub trait Notifiable<T>: Sync + Send {
    fn callback(&self) -> Callback<T>;
    fn set_id(&mut self, id: Uuid);
}
