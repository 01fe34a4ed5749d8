// Fixed-value platform used by tests and hardware-free runs.

use crate::errors::SnapshotError;
use crate::ports::{
    BatteryGauge, CameraPort, CameraSpecs, GraphicsPort, MemoryPort, PowerPort, StoragePort,
    SystemPort,
};

/// Platform answering every query with configured values.
#[derive(Debug, Clone)]
pub struct PlatformFake {
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub os_version: String,
    pub cpu_arch: String,
    pub ram_gb: (f64, f64),
    pub storage_gb: (f64, f64),
    pub battery: BatteryGauge,
    pub camera: Result<CameraSpecs, SnapshotError>,
    pub gpu_renderer: String,
}

impl Default for PlatformFake {
    fn default() -> Self {
        Self {
            manufacturer: "Acme".to_string(),
            model_name: "Inspector One".to_string(),
            model_number: "one-001".to_string(),
            os_version: "TestOS 1.0".to_string(),
            cpu_arch: "x86_64 test-core".to_string(),
            ram_gb: (3.25, 7.75),
            storage_gb: (48.5, 118.0),
            battery: BatteryGauge {
                level: 80,
                scale: 100,
            },
            camera: Ok(CameraSpecs {
                sensor_width: 6.4,
                sensor_height: 4.8,
                apertures: vec![1.8],
            }),
            gpu_renderer: "fake-gl".to_string(),
        }
    }
}

impl SystemPort for PlatformFake {
    fn manufacturer(&self) -> String {
        self.manufacturer.clone()
    }

    fn model_name(&self) -> String {
        self.model_name.clone()
    }

    fn model_number(&self) -> String {
        self.model_number.clone()
    }

    fn os_version(&self) -> String {
        self.os_version.clone()
    }

    fn cpu_arch(&self) -> String {
        self.cpu_arch.clone()
    }
}

impl MemoryPort for PlatformFake {
    fn ram_gb(&self) -> (f64, f64) {
        self.ram_gb
    }
}

impl StoragePort for PlatformFake {
    fn storage_gb(&self) -> (f64, f64) {
        self.storage_gb
    }
}

impl PowerPort for PlatformFake {
    fn battery(&self) -> BatteryGauge {
        self.battery
    }
}

impl CameraPort for PlatformFake {
    fn specs(&self) -> Result<CameraSpecs, SnapshotError> {
        self.camera.clone()
    }
}

impl GraphicsPort for PlatformFake {
    fn renderer(&self) -> String {
        self.gpu_renderer.clone()
    }
}
