use crate::errors::SnapshotError;

/// Static identity facts of the device.
pub trait SystemPort {
    fn manufacturer(&self) -> String;
    fn model_name(&self) -> String;
    fn model_number(&self) -> String;
    fn os_version(&self) -> String;
    fn cpu_arch(&self) -> String;
}

/// Memory facts, in GB.
pub trait MemoryPort {
    /// (available, total)
    fn ram_gb(&self) -> (f64, f64);
}

/// Storage facts, in GB.
pub trait StoragePort {
    /// (available, total)
    fn storage_gb(&self) -> (f64, f64);
}

/// Raw charge gauge: a level out of a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryGauge {
    pub level: i32,
    pub scale: i32,
}

impl BatteryGauge {
    pub fn percent(&self) -> f32 {
        self.level as f32 / self.scale as f32 * 100.0
    }
}

pub trait PowerPort {
    fn battery(&self) -> BatteryGauge;
}

/// Camera capability facts. Sensor dimensions are in the platform's
/// physical unit; megapixels derive from their product.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSpecs {
    pub sensor_width: f32,
    pub sensor_height: f32,
    pub apertures: Vec<f32>,
}

impl CameraSpecs {
    pub fn megapixels(&self) -> f32 {
        self.sensor_width * self.sensor_height
    }

    /// The first advertised aperture, or 0.0 when none is advertised.
    pub fn aperture(&self) -> f32 {
        self.apertures.first().copied().unwrap_or_default()
    }
}

/// Camera capabilities; the one query surface allowed to fail.
pub trait CameraPort {
    fn specs(&self) -> Result<CameraSpecs, SnapshotError>;
}

/// Graphics renderer identity.
pub trait GraphicsPort {
    fn renderer(&self) -> String;
}
