//! System wiring, configuration, startup, and shutdown.

pub mod cart_system;
pub mod config;
pub mod telemetry;

pub use cart_system::*;
pub use config::*;
pub use telemetry::*;
