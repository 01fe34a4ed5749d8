use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::traits::publisher::Notifiable;
use crate::types::sensors::SensorKind;

/// Timed sample from a hardware sensor stream.
pub trait SensorSample: Send + Sync + Clone + 'static {
    type Untimed;

    /// Returns the delivery timestamp of the sample, in seconds.
    fn timestamp_secs(&self) -> f64;
    /// Returns the measurement carried by the sample.
    fn measurement(&self) -> Self::Untimed;
    /// Builds a sample from a timestamp and a measurement.
    fn from_measurement(timestamp_secs: f64, measurement: Self::Untimed) -> Self;
}

/// Source of live sensor readings. A source exposes at most one default
/// sensor per kind, so registration is keyed by [`SensorKind`] alone.
#[async_trait]
pub trait SensorSource<T>: Send + Sync {
    /// Kinds this source can deliver readings for.
    fn available_sensors(&self) -> Vec<SensorKind>;

    /// Registers a listener for readings of `kind` and returns its id.
    fn register_listener(
        &self,
        listener: &mut dyn Notifiable<T>,
        kind: SensorKind,
    ) -> Result<Uuid, String>;

    /// Removes a previously registered listener.
    fn unregister_listener(&self, id: Uuid);

    /// Delivers `data` to every listener registered for `kind`.
    async fn notify_listeners(&self, kind: SensorKind, data: Arc<T>);
}
