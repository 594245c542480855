//! Key-value persistence for the serialized cart.

pub mod error;
pub mod file;
pub mod memory;

pub use error::*;
pub use file::FileStore;
pub use memory::InMemoryStore;

/// Durable string blobs under application-chosen keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
