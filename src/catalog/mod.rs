//! Stock and catalog lookups the cart depends on.

mod entity;
pub mod error;
pub mod ports;

pub use error::*;
pub use ports::*;
