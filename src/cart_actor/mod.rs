//! The cart actor: owns the cart, validates edits against stock, and mirrors
//! every accepted edit to key-value storage.

pub mod error;
pub mod messages;
pub mod persistence;
pub mod service;

pub use error::*;
pub use messages::*;
pub use persistence::{load_cart, save_cart};
pub use service::CartService;
