use std::fmt;

/// Number of sensor kinds the inspector subscribes to.
pub const N_SENSOR_KINDS: usize = 5;

/// The five hardware sensor streams the inspector renders.
///
/// A device exposes at most one default sensor per kind, so the kinds carry
/// no further identity. The `usize` conversion yields a stable index used
/// to order publishers and text regions.
///
/// # Examples
///
/// ```
/// use inspector_common::types::sensors::SensorKind;
///
/// assert_eq!(usize::from(SensorKind::Accelerometer), 0);
/// assert_eq!(SensorKind::try_from("rotation vector").unwrap(), SensorKind::RotationVector);
/// assert_eq!(SensorKind::try_from("LIGHT").unwrap(), SensorKind::AmbientLight);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
    RotationVector,
    Proximity,
    AmbientLight,
}

impl SensorKind {
    pub const ALL: [SensorKind; N_SENSOR_KINDS] = [
        SensorKind::Accelerometer,
        SensorKind::Gyroscope,
        SensorKind::RotationVector,
        SensorKind::Proximity,
        SensorKind::AmbientLight,
    ];
}

impl From<&SensorKind> for usize {
    fn from(value: &SensorKind) -> Self {
        match value {
            SensorKind::Accelerometer => 0,
            SensorKind::Gyroscope => 1,
            SensorKind::RotationVector => 2,
            SensorKind::Proximity => 3,
            SensorKind::AmbientLight => 4,
        }
    }
}

impl From<SensorKind> for usize {
    fn from(value: SensorKind) -> Self {
        usize::from(&value)
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorKind::Accelerometer => "Accelerometer",
            SensorKind::Gyroscope => "Gyroscope",
            SensorKind::RotationVector => "Rotation Vector",
            SensorKind::Proximity => "Proximity",
            SensorKind::AmbientLight => "Ambient Light",
        };
        write!(f, "{}", name)
    }
}

impl TryFrom<&str> for SensorKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower_case_value = value.to_lowercase();
        if lower_case_value.contains("acc") {
            Ok(Self::Accelerometer)
        } else if lower_case_value.contains("gyr") {
            Ok(Self::Gyroscope)
        } else if lower_case_value.contains("rot") {
            Ok(Self::RotationVector)
        } else if lower_case_value.contains("prox") {
            Ok(Self::Proximity)
        } else if lower_case_value.contains("light") || lower_case_value.contains("lux") {
            Ok(Self::AmbientLight)
        } else {
            Err(format!("Unknown sensor kind: {}", value))
        }
    }
}

impl TryFrom<String> for SensorKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SensorKind::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_stable_and_distinct() {
        let indices: Vec<usize> = SensorKind::ALL.iter().map(usize::from).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            SensorKind::try_from("accelerometer").unwrap(),
            SensorKind::Accelerometer
        );
        assert_eq!(
            SensorKind::try_from("gyroscope").unwrap(),
            SensorKind::Gyroscope
        );
        assert_eq!(
            SensorKind::try_from("rotation vector").unwrap(),
            SensorKind::RotationVector
        );
        assert_eq!(
            SensorKind::try_from("proximity").unwrap(),
            SensorKind::Proximity
        );
        assert_eq!(
            SensorKind::try_from("ambient light").unwrap(),
            SensorKind::AmbientLight
        );
    }

    #[test]
    fn test_from_str_case_insensitive_partial_match() {
        assert_eq!(
            SensorKind::try_from("ACCeleroMeter").unwrap(),
            SensorKind::Accelerometer
        );
        assert_eq!(SensorKind::try_from("GyR").unwrap(), SensorKind::Gyroscope);
        assert_eq!(
            SensorKind::try_from("rot").unwrap(),
            SensorKind::RotationVector
        );
        assert_eq!(
            SensorKind::try_from("lux meter").unwrap(),
            SensorKind::AmbientLight
        );
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(SensorKind::try_from("barometer").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SensorKind::AmbientLight.to_string(), "Ambient Light");
        assert_eq!(SensorKind::RotationVector.to_string(), "Rotation Vector");
    }
}
