use crate::traits::SensorSample;
use crate::types::untimed::{UnitQuaternion, N_QUATERNION_COORDINATES};

/// An orientation sample with a delivery timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleQuaternion {
    timestamp: f64,
    measurement: UnitQuaternion,
}

impl SampleQuaternion {
    /// Components ordered `x, y, z, w`.
    pub fn new(timestamp: f64, measurement: [f64; N_QUATERNION_COORDINATES]) -> Self {
        Self {
            timestamp,
            measurement: UnitQuaternion::new(measurement),
        }
    }

    pub fn from_quaternion(timestamp: f64, measurement: UnitQuaternion) -> Self {
        Self {
            timestamp,
            measurement,
        }
    }
}

impl SensorSample for SampleQuaternion {
    type Untimed = UnitQuaternion;

    fn timestamp_secs(&self) -> f64 {
        self.timestamp
    }

    fn measurement(&self) -> Self::Untimed {
        self.measurement.clone()
    }

    fn from_measurement(timestamp_secs: f64, measurement: Self::Untimed) -> Self {
        Self {
            timestamp: timestamp_secs,
            measurement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let sample = SampleQuaternion::new(1.0, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(sample.timestamp_secs(), 1.0);
        assert_eq!(sample.measurement(), UnitQuaternion::default());
    }
}
