//! # Crate sensor_hub
//!
//! ## sensor-hub
//!
//! The `sensor_hub` crate acquires live readings from the five hardware
//! sensor streams a handset exposes (accelerometer, gyroscope, rotation
//! vector, proximity, ambient light) and delivers each new reading to the
//! listeners registered for its kind.
//!
//! Features include:
//! - A production adapter polling the sensor REST API of a handset on the
//!   local network.
//! - A mock adapter synthesizing plausible signals for every stream, for
//!   tests and offline runs.
//! - A service wrapping either adapter with start/stop lifecycle control:
//!   `start` is idempotent while running, `stop` ends delivery
//!   unconditionally.
//! - Registration of listeners to receive readings per sensor kind.

pub mod adapters;
pub mod constants;
pub(crate) mod helpers;
pub mod models;
pub mod ports;
pub mod services;

pub use crate::constants::NORMAL_RATE_MILLIS;
pub use crate::models::errors::HubError;
pub use crate::services::{run_mock_service, run_service, SensorService};
