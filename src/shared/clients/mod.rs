// External API clients
pub mod jupiter;

pub use jupiter::*;
