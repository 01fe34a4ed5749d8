use crate::traits::SensorSample;
use crate::types::sensors::SensorKind;
use crate::types::timed::{Sample3D, SampleQuaternion, SampleScalar};
use crate::types::untimed::{UnitQuaternion, N_XYZ_COORDINATES};

/// A single live sensor reading, tagged by kind.
///
/// Each reading replaces the previous one of the same kind in whatever is
/// rendering it; no history is retained anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Accelerometer(Sample3D),
    Gyroscope(Sample3D),
    RotationVector(SampleQuaternion),
    Proximity(SampleScalar),
    AmbientLight(SampleScalar),
}

impl Reading {
    /// Builds a reading from raw component values, validating arity.
    ///
    /// Axis kinds take 3 components, the rotation vector 3 or 4 (`x, y, z,
    /// w` with `w` optional), proximity and ambient light exactly 1.
    pub fn from_components(
        kind: SensorKind,
        timestamp_secs: f64,
        components: &[f64],
    ) -> Result<Self, String> {
        match kind {
            SensorKind::Accelerometer | SensorKind::Gyroscope => {
                let axes: [f64; N_XYZ_COORDINATES] = components
                    .try_into()
                    .map_err(|_| format!("{} expects {} components", kind, N_XYZ_COORDINATES))?;
                let sample = Sample3D::new(timestamp_secs, axes);
                Ok(match kind {
                    SensorKind::Accelerometer => Reading::Accelerometer(sample),
                    _ => Reading::Gyroscope(sample),
                })
            }
            SensorKind::RotationVector => {
                let quaternion = UnitQuaternion::try_from(components.to_vec())
                    .map_err(|e| format!("{}: {}", kind, e))?;
                Ok(Reading::RotationVector(SampleQuaternion::from_quaternion(
                    timestamp_secs,
                    quaternion,
                )))
            }
            SensorKind::Proximity | SensorKind::AmbientLight => {
                if components.len() != 1 {
                    return Err(format!("{} expects a single component", kind));
                }
                let sample = SampleScalar::new(timestamp_secs, components[0]);
                Ok(match kind {
                    SensorKind::Proximity => Reading::Proximity(sample),
                    _ => Reading::AmbientLight(sample),
                })
            }
        }
    }

    pub fn kind(&self) -> SensorKind {
        match self {
            Reading::Accelerometer(_) => SensorKind::Accelerometer,
            Reading::Gyroscope(_) => SensorKind::Gyroscope,
            Reading::RotationVector(_) => SensorKind::RotationVector,
            Reading::Proximity(_) => SensorKind::Proximity,
            Reading::AmbientLight(_) => SensorKind::AmbientLight,
        }
    }

    pub fn timestamp_secs(&self) -> f64 {
        match self {
            Reading::Accelerometer(sample) | Reading::Gyroscope(sample) => sample.timestamp_secs(),
            Reading::RotationVector(sample) => sample.timestamp_secs(),
            Reading::Proximity(sample) | Reading::AmbientLight(sample) => sample.timestamp_secs(),
        }
    }

    /// Component values in platform order (`x, y, z[, w]`, or the single
    /// scalar).
    pub fn components(&self) -> Vec<f64> {
        match self {
            Reading::Accelerometer(sample) | Reading::Gyroscope(sample) => {
                sample.measurement().into()
            }
            Reading::RotationVector(sample) => sample.measurement().into(),
            Reading::Proximity(sample) | Reading::AmbientLight(sample) => {
                sample.measurement().into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_components_axis_kinds() {
        let reading =
            Reading::from_components(SensorKind::Accelerometer, 1.0, &[0.0, 0.0, 9.81]).unwrap();
        assert_eq!(reading.kind(), SensorKind::Accelerometer);
        assert_eq!(reading.components(), vec![0.0, 0.0, 9.81]);
        assert_eq!(reading.timestamp_secs(), 1.0);

        let reading =
            Reading::from_components(SensorKind::Gyroscope, 2.0, &[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(reading.kind(), SensorKind::Gyroscope);
    }

    #[test]
    fn test_from_components_rotation_with_and_without_w() {
        let full =
            Reading::from_components(SensorKind::RotationVector, 1.0, &[0.0, 0.0, 0.0, 1.0])
                .unwrap();
        let implicit =
            Reading::from_components(SensorKind::RotationVector, 1.0, &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(full.components(), implicit.components());
        assert_eq!(full.components(), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_components_scalar_kinds() {
        let reading = Reading::from_components(SensorKind::Proximity, 1.0, &[3.5]).unwrap();
        assert_eq!(reading.kind(), SensorKind::Proximity);
        assert_eq!(reading.components(), vec![3.5]);

        let reading = Reading::from_components(SensorKind::AmbientLight, 1.0, &[120.0]).unwrap();
        assert_eq!(reading.kind(), SensorKind::AmbientLight);
    }

    #[test]
    fn test_from_components_wrong_arity() {
        assert!(Reading::from_components(SensorKind::Accelerometer, 1.0, &[1.0]).is_err());
        assert!(Reading::from_components(SensorKind::Proximity, 1.0, &[1.0, 2.0]).is_err());
        assert!(Reading::from_components(SensorKind::RotationVector, 1.0, &[1.0, 2.0]).is_err());
    }
}
