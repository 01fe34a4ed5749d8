pub mod publisher;
pub mod sensor;

pub use crate::traits::publisher::Notifiable;
pub use crate::traits::sensor::{SensorSample, SensorSource};
