use log::error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use uuid::Uuid;

use inspector_common::traits::{Notifiable, SensorSource};
use inspector_common::types::{Reading, SensorKind};
use publisher::PublisherManager;

use crate::adapters::{Handset, HandsetMock};
use crate::models::errors::HubError;
use crate::models::shutdown;
use crate::ports::HubPort;

/// Bridges an acquisition backend to registered listeners: one publisher
/// per sensor kind in the backend's cluster, an abort signal for `stop`,
/// and a running flag making `start` idempotent.
pub struct SensorService<C>
where
    C: HubPort,
{
    client: C,
    publishers: PublisherManager<Reading, SensorKind>,
    abort_signal: Arc<Notify>,
    running: AtomicBool,
}

impl<C> SensorService<C>
where
    C: HubPort,
{
    /// Creates a new `SensorService` around the given acquisition backend.
    pub fn new(client: C) -> Self {
        let sensor_cluster = client.sensor_cluster();
        let publishers = PublisherManager::new(&sensor_cluster);

        SensorService {
            client,
            publishers,
            abort_signal: Arc::new(Notify::new()),
            running: AtomicBool::new(false),
        }
    }

    /// Runs acquisition until [`stop`](Self::stop) is called, ctrl-c is
    /// received, or the optional time budget elapses.
    ///
    /// Calling `start` while acquisition is already running is a no-op, so
    /// repeated foreground entries cannot duplicate callback delivery.
    pub async fn start(
        &self,
        period: Duration,
        run_for_millis: Option<u64>,
    ) -> Result<(), HubError> {
        if self.running.swap(true, Ordering::SeqCst) {
            log::warn!("Sensor service already started, ignoring");
            return Ok(());
        }
        shutdown::listen_for_shutdown(Arc::clone(&self.abort_signal), run_for_millis);
        let result = self
            .client
            .start(period, Arc::clone(&self.abort_signal), self.publishers.clone())
            .await;
        self.running.store(false, Ordering::SeqCst);
        result
    }

    /// Aborts the acquisition loop; no callbacks fire afterwards.
    ///
    /// The stop permit is kept until the loop observes it, so a `stop`
    /// issued just before the loop begins polling still aborts it.
    pub fn stop(&self) {
        self.abort_signal.notify_one();
    }
}

#[async_trait]
impl<C> SensorSource<Reading> for SensorService<C>
where
    C: HubPort,
{
    fn available_sensors(&self) -> Vec<SensorKind> {
        self.publishers.available_keys()
    }

    fn register_listener(
        &self,
        listener: &mut dyn Notifiable<Reading>,
        kind: SensorKind,
    ) -> Result<Uuid, String> {
        self.publishers
            .add_listener(listener, &kind)
            .map_err(|e| e.to_string())
    }

    fn unregister_listener(&self, id: Uuid) {
        if let Err(e) = self.publishers.remove_listener(id) {
            log::warn!("Failed to unregister listener: {}", e);
        }
    }

    async fn notify_listeners(&self, kind: SensorKind, data: Arc<Reading>) {
        self.publishers.notify_listeners(kind, data).await;
    }
}

/// Starts the handset-backed sensor service asynchronously.
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` representing the spawned acquisition
///   task.
/// * An `Arc<SensorService<Handset>>` for registering listeners and
///   stopping acquisition.
///
/// A ClientBuild error is returned if the HTTP client for the handset API
/// cannot be created.
pub fn run_service(
    base_url: &str,
    sensor_cluster: Vec<SensorKind>,
    update_period_millis: u64,
    run_for_millis: Option<u64>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<SensorService<Handset>>), HubError> {
    let handset = Handset::new(base_url, sensor_cluster)?;
    let service: Arc<SensorService<Handset>> = Arc::new(SensorService::new(handset));

    let handle = tokio::spawn({
        let service_clone = service.clone();
        async move {
            if let Err(e) = service_clone
                .start(Duration::from_millis(update_period_millis), run_for_millis)
                .await
            {
                error!("Error in handset acquisition loop: {}", e);
            }
        }
    });
    Ok((handle, service))
}

/// Starts a mock sensor service that synthesizes readings.
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` representing the spawned acquisition
///   task.
/// * An `Arc<SensorService<HandsetMock>>` for registering listeners and
///   stopping acquisition.
pub fn run_mock_service(
    sensor_cluster: Vec<SensorKind>,
    update_period_millis: u64,
    add_sensor_noise: bool,
    run_for_millis: Option<u64>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<SensorService<HandsetMock>>), HubError> {
    let mock = HandsetMock::new(sensor_cluster, add_sensor_noise)?;
    let service: Arc<SensorService<HandsetMock>> = Arc::new(SensorService::new(mock));

    let handle = tokio::spawn({
        let service_clone = service.clone();
        async move {
            if let Err(e) = service_clone
                .start(Duration::from_millis(update_period_millis), run_for_millis)
                .await
            {
                error!("Error in mock acquisition loop: {}", e);
            }
        }
    });
    Ok((handle, service))
}
