use inspector_common::types::sensors::N_SENSOR_KINDS;

/// Number of sensor streams the hub polls.
pub(crate) const N_SENSORS: usize = N_SENSOR_KINDS;

/// "Normal" sampling tier: one delivery per stream every 200 ms.
pub const NORMAL_RATE_MILLIS: u64 = 200;
