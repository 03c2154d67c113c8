// User domain services
pub mod state;
pub mod user_service;

pub use state::*;
pub use user_service::*;
