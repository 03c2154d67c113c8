// Domain modules
pub mod auth;
pub mod lst;
pub mod network;
pub mod swap;
pub mod transaction;
pub mod user;
