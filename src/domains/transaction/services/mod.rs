// Transaction domain services
pub mod state;
pub mod transaction_service;

pub use state::*;
pub use transaction_service::*;
