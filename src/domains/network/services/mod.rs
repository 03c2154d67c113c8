// Network domain services
pub mod network_service;
pub mod state;

pub use network_service::*;
pub use state::*;
