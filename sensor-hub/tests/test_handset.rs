use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use inspector_common::traits::SensorSource;
use inspector_common::types::{Reading, SensorKind};
use publisher::Listener;
use sensor_hub::services;

async fn mock_handset() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "buffers": [
                "acc_time", "accX", "accY", "accZ",
                "gyr_time", "gyrX", "gyrY", "gyrZ",
                "rot_time", "rotX", "rotY", "rotZ", "rotW",
                "prox_time", "prox",
                "light_time", "light"
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "buffer": {
                "accX": {"buffer": [0.17], "size": 0, "updateMode": "partial"},
                "accY": {"buffer": [0.29], "size": 0, "updateMode": "partial"},
                "accZ": {"buffer": [9.75], "size": 0, "updateMode": "partial"},
                "acc_time": {"buffer": [2.5], "size": 0, "updateMode": "partial"},
                "gyrX": {"buffer": [0.01], "size": 0, "updateMode": "partial"},
                "gyrY": {"buffer": [0.02], "size": 0, "updateMode": "partial"},
                "gyrZ": {"buffer": [0.03], "size": 0, "updateMode": "partial"},
                "gyr_time": {"buffer": [2.5], "size": 0, "updateMode": "partial"},
                "rotX": {"buffer": [0.0], "size": 0, "updateMode": "partial"},
                "rotY": {"buffer": [0.0], "size": 0, "updateMode": "partial"},
                "rotZ": {"buffer": [0.0], "size": 0, "updateMode": "partial"},
                "rotW": {"buffer": [1.0], "size": 0, "updateMode": "partial"},
                "rot_time": {"buffer": [2.5], "size": 0, "updateMode": "partial"},
                "prox": {"buffer": [3.5], "size": 0, "updateMode": "partial"},
                "prox_time": {"buffer": [2.5], "size": 0, "updateMode": "partial"},
                "light": {"buffer": [120.0], "size": 0, "updateMode": "partial"},
                "light_time": {"buffer": [2.5], "size": 0, "updateMode": "partial"}
            },
            "status": {"measuring": true, "session": "11114880", "timedRun": false}
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_handset_delivers_buffered_readings() {
    let server = mock_handset().await;
    let received: Arc<Mutex<Vec<Reading>>> = Arc::new(Mutex::new(Vec::new()));

    let (handle, service) =
        services::run_service(&server.uri(), SensorKind::ALL.to_vec(), 50, Some(600)).unwrap();

    let mut listener = Listener::new({
        let received = received.clone();
        move |_id, reading: Arc<Reading>| {
            let buffer = received.clone();
            async move {
                buffer.lock().await.push((*reading).clone());
            }
        }
    });
    service
        .register_listener(&mut listener, SensorKind::Proximity)
        .unwrap();

    handle.await.unwrap();

    let buffer = received.lock().await;
    assert_eq!(buffer.len(), 1, "a static buffer must deliver exactly once");
    assert_eq!(buffer[0].kind(), SensorKind::Proximity);
    assert_eq!(buffer[0].components(), vec![3.5]);
    assert_eq!(buffer[0].timestamp_secs(), 2.5);
}

#[tokio::test]
async fn test_handset_skips_kinds_the_device_lacks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "buffers": ["light_time", "light"]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "buffer": {
                "light": {"buffer": [120.0], "size": 0, "updateMode": "partial"},
                "light_time": {"buffer": [2.5], "size": 0, "updateMode": "partial"}
            },
            "status": {"measuring": true}
        })))
        .mount(&server)
        .await;

    let received: Arc<Mutex<Vec<Reading>>> = Arc::new(Mutex::new(Vec::new()));

    let (handle, service) =
        services::run_service(&server.uri(), SensorKind::ALL.to_vec(), 50, Some(400)).unwrap();

    let mut listener = Listener::new({
        let received = received.clone();
        move |_id, reading: Arc<Reading>| {
            let buffer = received.clone();
            async move {
                buffer.lock().await.push((*reading).clone());
            }
        }
    });
    // registered for a kind the device does not expose: never called
    service
        .register_listener(&mut listener, SensorKind::Proximity)
        .unwrap();

    handle.await.unwrap();

    assert!(received.lock().await.is_empty());
}
