//! # Crate device_inspector
//!
//! ## device-inspector
//!
//! The `device_inspector` crate captures a one-shot snapshot of device
//! facts (identity, memory, storage, battery, camera, CPU/GPU) behind
//! narrow capability ports, and renders live sensor readings into per-kind
//! text regions for as long as a foreground session is active.
//!
//! Entering the foreground registers one view-updating listener per sensor
//! kind and starts acquisition; exiting releases every registration and
//! stops acquisition, whatever the exit path.

pub mod adapters;
pub mod errors;
pub mod ports;
pub mod session;
pub mod snapshot;
pub mod view;

pub use crate::errors::SnapshotError;
pub use crate::session::Inspector;
pub use crate::snapshot::DeviceSnapshot;
pub use crate::view::InspectorView;
