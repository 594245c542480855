//! Turns cart results into user-facing messages.
//!
//! The cart itself only returns typed results; this layer decides what the
//! user sees.

pub mod notifier;
pub mod presenter;

pub use notifier::*;
pub use presenter::CartPresenter;

use crate::cart_actor::CartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// The mutation a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartOperation {
    fn success_message(self) -> &'static str {
        match self {
            CartOperation::AddProduct | CartOperation::UpdateProductAmount => "Product added to cart",
            CartOperation::RemoveProduct => "Cart updated",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            CartOperation::AddProduct => "Failed to add product",
            CartOperation::RemoveProduct => "Failed to remove product",
            CartOperation::UpdateProductAmount => "Failed to update product amount",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    /// Stock rejections get their own message; every other failure collapses
    /// to the operation's generic failure text.
    pub fn for_result<T>(operation: CartOperation, result: &Result<T, CartError>) -> Self {
        match result {
            Ok(_) => Self::success(operation.success_message()),
            Err(CartError::OutOfStock { .. }) => Self::error("Requested quantity is out of stock"),
            Err(_) => Self::error(operation.failure_message()),
        }
    }
}
