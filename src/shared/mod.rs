// Shared module
pub mod clients;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod storage;

pub use clients::*;
pub use config::*;
pub use errors::*;
pub use services::*;
pub use storage::*;
