use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use inspector_common::types::{Reading, SensorKind};
use publisher::PublisherManager;

use crate::models::errors::HubError;

/// Acquisition backend for the five sensor streams.
#[async_trait]
pub trait HubPort: Send + Sync {
    /// Sensor kinds this backend was configured to deliver.
    fn sensor_cluster(&self) -> Vec<SensorKind>;

    /// Kinds the device actually exposes a default sensor for.
    async fn available_sensors(&self) -> Result<Vec<SensorKind>, HubError>;

    /// Runs the acquisition loop until the abort signal fires, delivering
    /// each new reading to the publisher of its kind.
    async fn start(
        &self,
        period: Duration,
        abort_signal: Arc<Notify>,
        publishers: PublisherManager<Reading, SensorKind>,
    ) -> Result<(), HubError>;
}
