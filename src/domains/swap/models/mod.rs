// Swap domain models
pub mod swap;

pub use swap::*;
