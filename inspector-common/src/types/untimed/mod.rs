pub mod scalar;
pub mod unit_quaternion;
pub mod xyz;

pub use crate::types::untimed::scalar::Scalar;
pub use crate::types::untimed::unit_quaternion::{UnitQuaternion, N_QUATERNION_COORDINATES};
pub use crate::types::untimed::xyz::{N_XYZ_COORDINATES, XYZ};
