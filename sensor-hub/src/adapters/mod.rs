pub mod mock;
pub mod production;

pub use crate::adapters::mock::HandsetMock;
pub use crate::adapters::production::Handset;
