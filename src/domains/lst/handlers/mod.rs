// LST domain handlers
pub mod lst_handler;

pub use lst_handler::*;
