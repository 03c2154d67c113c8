// Auth domain models
pub mod auth;
pub mod jwt;
pub mod user;

pub use auth::*;
pub use jwt::*;
pub use user::*;
