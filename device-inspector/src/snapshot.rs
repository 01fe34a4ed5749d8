use log::error;

use crate::ports::{CameraPort, GraphicsPort, MemoryPort, PowerPort, StoragePort, SystemPort};

/// Everything the snapshot collector needs; implemented by any type
/// covering all six query surfaces.
pub trait DevicePlatform:
    SystemPort + MemoryPort + StoragePort + PowerPort + CameraPort + GraphicsPort
{
}

impl<T> DevicePlatform for T where
    T: SystemPort + MemoryPort + StoragePort + PowerPort + CameraPort + GraphicsPort
{
}

/// Immutable device facts captured once at view creation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub ram_available_gb: f64,
    pub ram_total_gb: f64,
    pub storage_available_gb: f64,
    pub storage_total_gb: f64,
    pub battery_pct: f32,
    pub os_version: String,
    pub camera_megapixels: f32,
    pub camera_aperture: f32,
    pub cpu_arch: String,
    pub gpu_renderer: String,
}

impl DeviceSnapshot {
    /// Multi-line info-region text.
    pub fn render(&self) -> String {
        format!(
            "Manufacturer: {}\n\
             Model name: {}\n\
             Model Number: {}\n\
             RAM Status: {:.2}/{:.2} GB\n\
             Storage Status: {:.2}/{:.2} GB\n\
             Battery: {:.1} %\n\
             OS Version: {}\n\
             Camera Megapixels: {:.2}\n\
             Camera Aperture: {}\n\
             CPU: {}\n\
             GPU: {}\n",
            self.manufacturer,
            self.model_name,
            self.model_number,
            self.ram_available_gb,
            self.ram_total_gb,
            self.storage_available_gb,
            self.storage_total_gb,
            self.battery_pct,
            self.os_version,
            self.camera_megapixels,
            self.camera_aperture,
            self.cpu_arch,
            self.gpu_renderer,
        )
    }
}

/// Queries the six platform surfaces once, in sequence: a synchronous read
/// per surface, no retries. Only the camera query may fail; a failure is
/// logged and leaves zero-valued camera fields while the rest of the
/// snapshot still renders.
pub fn collect(platform: &dyn DevicePlatform) -> DeviceSnapshot {
    let (ram_available_gb, ram_total_gb) = platform.ram_gb();
    let (storage_available_gb, storage_total_gb) = platform.storage_gb();
    let battery_pct = platform.battery().percent();

    let (camera_megapixels, camera_aperture) = match platform.specs() {
        Ok(specs) => (specs.megapixels(), specs.aperture()),
        Err(e) => {
            error!("{}", e);
            (0.0, 0.0)
        }
    };

    DeviceSnapshot {
        manufacturer: platform.manufacturer(),
        model_name: platform.model_name(),
        model_number: platform.model_number(),
        ram_available_gb,
        ram_total_gb,
        storage_available_gb,
        storage_total_gb,
        battery_pct,
        os_version: platform.os_version(),
        camera_megapixels,
        camera_aperture,
        cpu_arch: platform.cpu_arch(),
        gpu_renderer: platform.renderer(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PlatformFake;
    use crate::errors::SnapshotError;

    #[test]
    fn test_collect_computes_derived_fields() {
        let snapshot = collect(&PlatformFake::default());

        assert!((snapshot.camera_megapixels - 30.72).abs() < 1e-5);
        assert_eq!(snapshot.camera_aperture, 1.8);
        assert_eq!(snapshot.battery_pct, 80.0);
        assert_eq!(snapshot.manufacturer, "Acme");
        assert_eq!(snapshot.ram_total_gb, 7.75);
    }

    #[test]
    fn test_battery_percent_from_level_and_scale() {
        let platform = PlatformFake {
            battery: crate::ports::BatteryGauge {
                level: 50,
                scale: 100,
            },
            ..Default::default()
        };
        assert_eq!(collect(&platform).battery_pct, 50.0);
    }

    #[test]
    fn test_camera_failure_leaves_zeroed_fields() {
        let platform = PlatformFake {
            camera: Err(SnapshotError::CameraQuery("no camera present".to_string())),
            ..Default::default()
        };
        let snapshot = collect(&platform);

        assert_eq!(snapshot.camera_megapixels, 0.0);
        assert_eq!(snapshot.camera_aperture, 0.0);
        // the rest of the snapshot still renders
        assert_eq!(snapshot.manufacturer, "Acme");
        assert!(snapshot.render().contains("Camera Megapixels: 0.00"));
    }

    #[test]
    fn test_render_contains_every_fact() {
        let snapshot = collect(&PlatformFake::default());
        let text = snapshot.render();

        assert!(text.contains("Manufacturer: Acme"));
        assert!(text.contains("Model name: Inspector One"));
        assert!(text.contains("RAM Status: 3.25/7.75 GB"));
        assert!(text.contains("Storage Status: 48.50/118.00 GB"));
        assert!(text.contains("Battery: 80.0 %"));
        assert!(text.contains("OS Version: TestOS 1.0"));
        assert!(text.contains("Camera Megapixels: 30.72"));
        assert!(text.contains("Camera Aperture: 1.8"));
        assert!(text.contains("CPU: x86_64 test-core"));
        assert!(text.contains("GPU: fake-gl"));
    }
}
