pub mod callback;
pub mod sensors;
pub mod timed;
pub mod untimed;

pub use crate::types::callback::Callback;
pub use crate::types::sensors::{Accuracy, Reading, SensorKind};
