pub mod sample_3d;
pub mod sample_quaternion;
pub mod sample_scalar;

pub use crate::types::timed::sample_3d::Sample3D;
pub use crate::types::timed::sample_quaternion::SampleQuaternion;
pub use crate::types::timed::sample_scalar::SampleScalar;
