// Network domain models
pub mod network;

pub use network::*;
