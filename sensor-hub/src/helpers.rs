use serde::Deserialize;
use serde_json::Value;

use inspector_common::types::{Reading, SensorKind};

use crate::models::errors::HubError;

const ACC_VARIABLES: &[&str] = &["accX", "accY", "accZ"];
const ACC_TIME: &str = "acc_time";
const GYRO_VARIABLES: &[&str] = &["gyrX", "gyrY", "gyrZ"];
const GYRO_TIME: &str = "gyr_time";
const ROT_VARIABLES: &[&str] = &["rotX", "rotY", "rotZ", "rotW"];
const ROT_TIME: &str = "rot_time";
const PROX_VARIABLES: &[&str] = &["prox"];
const PROX_TIME: &str = "prox_time";
const LIGHT_VARIABLES: &[&str] = &["light"];
const LIGHT_TIME: &str = "light_time";

const STATUS: &str = "status";
const BUFFER: &str = "buffer";
const BUFFERS: &str = "buffers";

/// Per-kind buffer names on the handset API: (time variable, component
/// variables).
pub(crate) fn buffer_names(kind: SensorKind) -> (&'static str, &'static [&'static str]) {
    match kind {
        SensorKind::Accelerometer => (ACC_TIME, ACC_VARIABLES),
        SensorKind::Gyroscope => (GYRO_TIME, GYRO_VARIABLES),
        SensorKind::RotationVector => (ROT_TIME, ROT_VARIABLES),
        SensorKind::Proximity => (PROX_TIME, PROX_VARIABLES),
        SensorKind::AmbientLight => (LIGHT_TIME, LIGHT_VARIABLES),
    }
}

/// Builds the query string fetching `variables` newer than `since`.
pub(crate) fn build_query(variables: &[&str], time_var: &str, since: Option<f64>) -> String {
    let threshold = since.map_or_else(|| "full".to_string(), |s| s.to_string());
    let mut parts = Vec::with_capacity(variables.len() + 1);
    parts.push(format!("{}={}", time_var, threshold));
    for var in variables {
        parts.push(format!("{}={}|{}", var, threshold, time_var));
    }
    parts.join("&")
}

#[derive(Debug, Deserialize)]
pub(crate) struct HubStatus {
    pub(crate) measuring: bool,
}

/// Extracts the measuring flag from the payload's status object.
pub(crate) fn status_from_json(data: &Value) -> Result<HubStatus, HubError> {
    let status = data
        .get(STATUS)
        .ok_or_else(|| HubError::IncorrectDataFormat("Missing status".to_string()))?;
    serde_json::from_value(status.clone()).map_err(|e| HubError::IncorrectDataFormat(e.to_string()))
}

/// Parses the newest sample of `kind` from the payload: the last value of
/// each component buffer, stamped with the last time-buffer value. Returns
/// `None` when the buffers hold nothing new.
pub(crate) fn latest_reading(data: &Value, kind: SensorKind) -> Result<Option<Reading>, HubError> {
    let (time_var, variables) = buffer_names(kind);
    let buffers = data
        .get(BUFFER)
        .ok_or_else(|| HubError::IncorrectDataFormat("Missing buffer".to_string()))?;

    let timestamp = match last_value(buffers, time_var)? {
        Some(timestamp) => timestamp,
        None => return Ok(None),
    };
    let mut components = Vec::with_capacity(variables.len());
    for var in variables {
        match last_value(buffers, var)? {
            Some(value) => components.push(value),
            // a component buffer lagging behind its time buffer; wait for
            // the next poll
            None => return Ok(None),
        }
    }

    Reading::from_components(kind, timestamp, &components)
        .map(Some)
        .map_err(HubError::IncorrectDataFormat)
}

/// Kinds whose time buffer the handset exports, according to its config
/// payload.
pub(crate) fn available_from_config(data: &Value) -> Result<Vec<SensorKind>, HubError> {
    let names = data
        .get(BUFFERS)
        .and_then(Value::as_array)
        .ok_or_else(|| HubError::IncorrectDataFormat("Missing buffers".to_string()))?;
    let exported: Vec<&str> = names.iter().filter_map(Value::as_str).collect();
    Ok(SensorKind::ALL
        .into_iter()
        .filter(|kind| exported.contains(&buffer_names(*kind).0))
        .collect())
}

fn last_value(buffers: &Value, var: &str) -> Result<Option<f64>, HubError> {
    let buffer = buffers
        .get(var)
        .and_then(|v| v.get(BUFFER))
        .ok_or_else(|| HubError::IncorrectDataFormat(format!("Missing buffer for {}", var)))?;
    let values = buffer
        .as_array()
        .ok_or_else(|| HubError::IncorrectDataFormat(format!("Invalid buffer format for {}", var)))?;
    Ok(values.iter().rev().find_map(|v| v.as_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "buffer": {
                "prox": {"buffer": [5.0, 5.0, 3.5], "size": 0, "updateMode": "partial"},
                "prox_time": {"buffer": [2.5, 3.0, 3.5], "size": 0, "updateMode": "partial"},
                "rotX": {"buffer": [0.0], "size": 0, "updateMode": "partial"},
                "rotY": {"buffer": [0.0], "size": 0, "updateMode": "partial"},
                "rotZ": {"buffer": [0.0], "size": 0, "updateMode": "partial"},
                "rotW": {"buffer": [1.0], "size": 0, "updateMode": "partial"},
                "rot_time": {"buffer": [3.5], "size": 0, "updateMode": "partial"}
            },
            "status": {"measuring": true, "session": "11114880", "timedRun": false}
        })
    }

    #[test]
    fn test_build_query() {
        let query = build_query(&["prox"], "prox_time", Some(2.5));
        assert_eq!(query, "prox_time=2.5&prox=2.5|prox_time");

        let query = build_query(&["accX", "accY", "accZ"], "acc_time", None);
        assert_eq!(
            query,
            "acc_time=full&accX=full|acc_time&accY=full|acc_time&accZ=full|acc_time"
        );
    }

    #[test]
    fn test_status_from_json() {
        let status = status_from_json(&payload()).unwrap();
        assert!(status.measuring);

        assert!(status_from_json(&json!({})).is_err());
    }

    #[test]
    fn test_latest_reading_takes_newest_value() {
        let reading = latest_reading(&payload(), SensorKind::Proximity)
            .unwrap()
            .unwrap();
        assert_eq!(reading.kind(), SensorKind::Proximity);
        assert_eq!(reading.components(), vec![3.5]);
        assert_eq!(reading.timestamp_secs(), 3.5);
    }

    #[test]
    fn test_latest_reading_rotation_vector() {
        let reading = latest_reading(&payload(), SensorKind::RotationVector)
            .unwrap()
            .unwrap();
        assert_eq!(reading.components(), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_latest_reading_empty_buffers() {
        let data = json!({
            "buffer": {
                "prox": {"buffer": [], "size": 0, "updateMode": "partial"},
                "prox_time": {"buffer": [], "size": 0, "updateMode": "partial"}
            },
            "status": {"measuring": true}
        });
        assert!(latest_reading(&data, SensorKind::Proximity)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_latest_reading_missing_buffer_is_an_error() {
        let data = json!({"buffer": {}, "status": {"measuring": true}});
        assert!(latest_reading(&data, SensorKind::Proximity).is_err());
    }

    #[test]
    fn test_available_from_config() {
        let data = json!({"buffers": ["acc_time", "accX", "accY", "accZ", "light_time", "light"]});
        assert_eq!(
            available_from_config(&data).unwrap(),
            vec![SensorKind::Accelerometer, SensorKind::AmbientLight]
        );
    }
}
