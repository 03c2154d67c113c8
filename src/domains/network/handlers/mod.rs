// Network domain handlers
pub mod network_handler;

pub use network_handler::*;
