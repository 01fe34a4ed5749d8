pub mod accuracy;
pub mod reading;
pub mod sensor_kind;

pub use crate::types::sensors::accuracy::Accuracy;
pub use crate::types::sensors::reading::Reading;
pub use crate::types::sensors::sensor_kind::{SensorKind, N_SENSOR_KINDS};
