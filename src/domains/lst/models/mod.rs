// LST domain models
pub mod lst;

pub use lst::*;
