// Emulates the handset sensor streams with closed-form signals: gravity
// plus noise on the accelerometer, a resting gyroscope, a slow yaw
// rotation, a near/far proximity toggle, and a slowly swinging light level.

use std::f64::consts::TAU;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Notify;

use inspector_common::types::untimed::UnitQuaternion;
use inspector_common::types::{Reading, SensorKind};
use publisher::PublisherManager;

use self::gaussian::GaussianNoise;
use crate::models::errors::HubError;
use crate::ports::HubPort;

mod gaussian;

const GAUSSIAN_SENSOR_MEAN: f64 = 0.0;
const GAUSSIAN_SENSOR_STDEV: f64 = 0.05;

const STANDARD_GRAVITY: f64 = 9.80665;
const YAW_RATE_RAD_PER_SEC: f64 = 0.1;
const PROXIMITY_FAR_CM: f64 = 5.0;
const PROXIMITY_NEAR_CM: f64 = 0.0;
const PROXIMITY_TOGGLE_TICKS: u64 = 25;
const LIGHT_BASE_LUX: f64 = 120.0;
const LIGHT_SWING_LUX: f64 = 30.0;
const LIGHT_PERIOD_SECS: f64 = 10.0;

/// Synthesizes plausible readings for every configured sensor kind.
pub struct HandsetMock {
    sensor_cluster: Vec<SensorKind>,
    sensor_noise: Option<GaussianNoise>,
}

impl HandsetMock {
    /// Creates a new `HandsetMock` instance with the specified
    /// configuration.
    pub fn new(sensor_cluster: Vec<SensorKind>, add_sensor_noise: bool) -> Result<Self, HubError> {
        Ok(Self {
            sensor_cluster,
            sensor_noise: add_sensor_noise
                .then(|| GaussianNoise::new(GAUSSIAN_SENSOR_MEAN, GAUSSIAN_SENSOR_STDEV)),
        })
    }

    fn sample(
        &self,
        kind: SensorKind,
        elapsed_secs: f64,
        tick: u64,
        rng: &mut StdRng,
    ) -> Result<Reading, HubError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| HubError::Other(e.to_string()))?
            .as_secs_f64();

        let components = match kind {
            SensorKind::Accelerometer => {
                self.with_noise(rng, vec![0.0, 0.0, STANDARD_GRAVITY])
            }
            SensorKind::Gyroscope => self.with_noise(rng, vec![0.0, 0.0, 0.0]),
            SensorKind::RotationVector => {
                UnitQuaternion::from_euler_angles(0.0, 0.0, YAW_RATE_RAD_PER_SEC * elapsed_secs)
                    .components()
                    .to_vec()
            }
            SensorKind::Proximity => {
                let far = (tick / PROXIMITY_TOGGLE_TICKS) % 2 == 0;
                vec![if far { PROXIMITY_FAR_CM } else { PROXIMITY_NEAR_CM }]
            }
            SensorKind::AmbientLight => {
                let swing = LIGHT_SWING_LUX * (TAU * elapsed_secs / LIGHT_PERIOD_SECS).sin();
                self.with_noise(rng, vec![LIGHT_BASE_LUX + swing])
            }
        };

        Reading::from_components(kind, timestamp, &components).map_err(HubError::Other)
    }

    fn with_noise(&self, rng: &mut StdRng, values: Vec<f64>) -> Vec<f64> {
        match &self.sensor_noise {
            Some(noise) => noise.add_noise_vec(rng, values),
            None => values,
        }
    }
}

#[async_trait]
impl HubPort for HandsetMock {
    fn sensor_cluster(&self) -> Vec<SensorKind> {
        self.sensor_cluster.clone()
    }

    // The mock exposes every kind it was configured with
    async fn available_sensors(&self) -> Result<Vec<SensorKind>, HubError> {
        Ok(self.sensor_cluster.clone())
    }

    async fn start(
        &self,
        period: Duration,
        abort_signal: Arc<Notify>,
        publishers: PublisherManager<Reading, SensorKind>,
    ) -> Result<(), HubError> {
        let mut rng = StdRng::from_entropy();
        let started = Instant::now();
        let mut ticker = tokio::time::interval(period);
        let mut tick: u64 = 0;

        loop {
            tokio::select! {
                biased;

                _ = abort_signal.notified() => {
                    break;
                }

                _ = ticker.tick() => {
                    let elapsed_secs = started.elapsed().as_secs_f64();
                    for kind in &self.sensor_cluster {
                        match self.sample(*kind, elapsed_secs, tick, &mut rng) {
                            Ok(reading) => {
                                publishers.notify_listeners(*kind, Arc::new(reading)).await;
                            }
                            Err(e) => {
                                log::error!("Mock sample generation failed: {}", e);
                            }
                        }
                    }
                    tick += 1;
                }
            }
        }

        Ok(())
    }
}
