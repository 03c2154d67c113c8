// LST domain services
pub mod lst_service;
pub mod state;

pub use lst_service::*;
pub use state::*;
