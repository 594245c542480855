use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::CartConfig;
use crate::cart_actor::{CartError, CartService};
use crate::catalog::{ProductService, StockService};
use crate::clients::CartClient;
use crate::storage::{FileStore, InMemoryStore, KeyValueStore};

/// Starts the cart actor and owns its task until shutdown.
pub struct CartSystem {
    pub cart_client: CartClient,
    handle: JoinHandle<()>,
}

impl CartSystem {
    pub fn start(
        config: &CartConfig,
        stock: Arc<dyn StockService>,
        products: Arc<dyn ProductService>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        info!(key = %config.storage_key, "Starting cart system");
        let (service, cart_client) = CartService::new(
            config.buffer_size,
            config.storage_key.clone(),
            stock,
            products,
            store,
        );
        let handle = tokio::spawn(service.run());
        Self { cart_client, handle }
    }

    /// The store `config` asks for: a JSON file when a path is set, memory otherwise.
    pub fn store_for(config: &CartConfig) -> Arc<dyn KeyValueStore> {
        match &config.storage_path {
            Some(path) => Arc::new(FileStore::new(path)),
            None => Arc::new(InMemoryStore::new()),
        }
    }

    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down cart system...");
        // Already stopped if every other client is gone; that is fine.
        let _ = self.cart_client.shutdown().await;
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(CartError::ActorCommunicationError(format!("Cart actor task failed: {e}")));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
