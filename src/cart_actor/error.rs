use thiserror::Error;

use crate::catalog::CatalogError;
use crate::domain::ProductId;
use crate::storage::StorageError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    OutOfStock { requested: u64, available: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Cart storage error: {0}")]
    Storage(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    OutOfStock,
    InvalidInput,
    /// Network, storage, or anything else unexpected; retrying may succeed.
    Transient,
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::NotFound(_) => ErrorKind::NotFound,
            CartError::OutOfStock { .. } => ErrorKind::OutOfStock,
            CartError::InvalidInput(_) => ErrorKind::InvalidInput,
            CartError::Upstream(_)
            | CartError::Storage(_)
            | CartError::ActorCommunicationError(_) => ErrorKind::Transient,
        }
    }
}

impl From<CatalogError> for CartError {
    fn from(e: CatalogError) -> Self {
        CartError::Upstream(e.to_string())
    }
}

impl From<StorageError> for CartError {
    fn from(e: StorageError) -> Self {
        CartError::Storage(e.to_string())
    }
}
