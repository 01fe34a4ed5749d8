pub mod mock;
pub mod production;

pub use crate::adapters::mock::PlatformFake;
pub use crate::adapters::production::Platform;
