// Acquisition of live readings from the sensor streams of a handset
// reachable over HTTP. Each poll fetches the buffers of every configured
// stream and forwards the newest sample per kind.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use inspector_common::types::{Reading, SensorKind};
use publisher::PublisherManager;

use crate::constants::N_SENSORS;
use crate::helpers;
use crate::models::errors::HubError;
use crate::models::http_client::HttpClient;
use crate::ports::HubPort;

/// Constants for HTTP endpoints.
const GET_CMD: &str = "/get?";
const CONFIG_CMD: &str = "/config?";

/// Handset sensor API client.
pub struct Handset {
    client: HttpClient,
    sensor_cluster: Vec<SensorKind>,
}

impl Handset {
    /// Creates a new `Handset` instance for the given base URL.
    /// Returns a ClientBuild error if the HTTP client cannot be created.
    pub fn new(base_url: &str, sensor_cluster: Vec<SensorKind>) -> Result<Self, HubError> {
        let client = HttpClient::new(base_url.to_string())?;

        Ok(Self {
            client,
            sensor_cluster,
        })
    }

    /// Returns JSON data from the specified path, or a FetchData error if
    /// the handset API could not be reached.
    async fn fetch_json(&self, path: &str) -> Result<Value, HubError> {
        self.client.fetch_json(path).await
    }

    /// Returns the newest reading for `kind`, if the handset buffered
    /// anything newer than `since`.
    /// # Errors
    /// - FetchData if there is an error connecting to the handset API
    /// - IncorrectDataFormat if the payload has an unexpected shape
    async fn poll_kind(
        &self,
        kind: SensorKind,
        since: Option<f64>,
    ) -> Result<Option<Reading>, HubError> {
        let (time_var, variables) = helpers::buffer_names(kind);
        let query = helpers::build_query(variables, time_var, since);
        let data = self.fetch_json(&format!("{GET_CMD}{}", query)).await?;
        let status = helpers::status_from_json(&data)?;
        if !status.measuring {
            log::debug!("handset is not measuring, skipping {}", kind);
            return Ok(None);
        }
        helpers::latest_reading(&data, kind)
    }
}

#[async_trait]
impl HubPort for Handset {
    fn sensor_cluster(&self) -> Vec<SensorKind> {
        self.sensor_cluster.clone()
    }

    async fn available_sensors(&self) -> Result<Vec<SensorKind>, HubError> {
        let data = self.fetch_json(CONFIG_CMD).await?;
        helpers::available_from_config(&data)
    }

    async fn start(
        &self,
        period: Duration,
        abort_signal: Arc<Notify>,
        publishers: PublisherManager<Reading, SensorKind>,
    ) -> Result<(), HubError> {
        let available = self.available_sensors().await?;
        let mut last_seen = [None::<f64>; N_SENSORS];

        log::info!("Fetching readings from handset...");

        let mut ticker = tokio::time::interval(period);

        loop {
            tokio::select! {
                biased;

                _ = abort_signal.notified() => {
                    break;
                }

                _ = ticker.tick() => {
                    for kind in &self.sensor_cluster {
                        if !available.contains(kind) {
                            continue;
                        }
                        let sensor_idx = usize::from(kind);
                        match self.poll_kind(*kind, last_seen[sensor_idx]).await {
                            Ok(Some(reading)) => {
                                // a handset that ignores the since threshold
                                // replays old samples; deliver only newer ones
                                let timestamp = reading.timestamp_secs();
                                if last_seen[sensor_idx].map_or(false, |seen| timestamp <= seen) {
                                    continue;
                                }
                                last_seen[sensor_idx] = Some(timestamp);
                                publishers.notify_listeners(*kind, Arc::new(reading)).await;
                            }
                            Ok(None) => {}
                            Err(e) => {
                                log::error!("Error fetching {} data: {}", kind, e);
                            }
                        }
                    }
                }
            }
        }

        log::info!("Handset polling stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handset_new() {
        let handset = Handset::new("http://localhost:8080", SensorKind::ALL.to_vec())
            .expect("Error creating Handset instance");
        assert_eq!(handset.sensor_cluster(), SensorKind::ALL.to_vec());
    }
}
