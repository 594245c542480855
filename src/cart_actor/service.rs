use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::catalog::{ProductService, StockService};
use crate::clients::CartClient;
use crate::domain::{Cart, Product, ProductId};
use crate::storage::KeyValueStore;
use super::{load_cart, save_cart, CartError, CartRequest, ErrorKind, ServiceResponse, UpdateProductAmount};

/// Owns the cart and applies requests one at a time.
///
/// Collaborator calls are awaited inside the loop, so two requests for the
/// same product can never both start from the same cart. Each edit is
/// persisted before it replaces the in-memory cart; a failed edit leaves
/// both untouched.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    storage_key: String,
    stock: Arc<dyn StockService>,
    products: Arc<dyn ProductService>,
    store: Arc<dyn KeyValueStore>,
}

impl CartService {
    /// Builds the service with the cart stored under `storage_key` and returns
    /// the client handle for it.
    pub fn new(
        buffer_size: usize,
        storage_key: impl Into<String>,
        stock: Arc<dyn StockService>,
        products: Arc<dyn ProductService>,
        store: Arc<dyn KeyValueStore>,
    ) -> (Self, CartClient) {
        let storage_key = storage_key.into();
        let cart = load_cart(store.as_ref(), &storage_key);
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            cart,
            storage_key,
            stock,
            products,
            store,
        };
        (service, CartClient::new(sender))
    }

    #[instrument(name = "cart_service", skip(self), fields(key = %self.storage_key))]
    pub async fn run(mut self) {
        info!(items = self.cart.len(), "CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.clone()));
                }
                CartRequest::AddProduct { product_id, respond_to } => {
                    self.handle_add_product(product_id, respond_to).await;
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    self.handle_remove_product(product_id, respond_to);
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    self.handle_update_product_amount(update, respond_to).await;
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_add_product(&mut self, product_id: ProductId, respond_to: ServiceResponse<Cart, CartError>) {
        debug!("Processing add_product request");
        let result = self.add_product(product_id).await;
        log_outcome(&result);
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_remove_product(&mut self, product_id: ProductId, respond_to: ServiceResponse<Cart, CartError>) {
        debug!("Processing remove_product request");
        let next = self.cart.without(product_id);
        if next.len() == self.cart.len() {
            debug!("Product was not in the cart");
        }
        let result = self.commit(next);
        log_outcome(&result);
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = update.product_id, amount = update.amount), skip(self, update, respond_to))]
    async fn handle_update_product_amount(
        &mut self,
        update: UpdateProductAmount,
        respond_to: ServiceResponse<Cart, CartError>,
    ) {
        debug!("Processing update_product_amount request");
        let result = self.update_product_amount(update).await;
        log_outcome(&result);
        let _ = respond_to.send(result);
    }

    async fn add_product(&mut self, product_id: ProductId) -> Result<Cart, CartError> {
        let stock = self
            .stock
            .get_stock(product_id)
            .await?
            .ok_or(CartError::NotFound(product_id))?;

        // Compare against the quantity already held, before incrementing.
        let held = self.cart.find(product_id).map_or(0, |item| item.amount);
        if stock.amount <= held {
            return Err(CartError::OutOfStock {
                requested: u64::from(held) + 1,
                available: stock.amount,
            });
        }

        let next = if held > 0 {
            self.cart.with_amount(product_id, held + 1)
        } else {
            let product = self
                .products
                .get_product(product_id)
                .await?
                .ok_or(CartError::NotFound(product_id))?;
            self.cart.with_appended(Product::from_catalog(product))
        };

        self.commit(next)
    }

    async fn update_product_amount(&mut self, update: UpdateProductAmount) -> Result<Cart, CartError> {
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            return Err(CartError::InvalidInput(format!("amount must be positive, got {amount}")));
        }
        let delta = u32::try_from(amount)
            .map_err(|_| CartError::InvalidInput(format!("amount {amount} is too large")))?;

        let stock = self
            .stock
            .get_stock(product_id)
            .await?
            .ok_or(CartError::NotFound(product_id))?;

        let held = self
            .cart
            .find(product_id)
            .map(|item| item.amount)
            .ok_or(CartError::NotFound(product_id))?;

        let requested = u64::from(held) + u64::from(delta);
        if requested > u64::from(stock.amount) {
            return Err(CartError::OutOfStock {
                requested,
                available: stock.amount,
            });
        }
        let new_amount = u32::try_from(requested)
            .map_err(|_| CartError::InvalidInput(format!("amount {requested} is too large")))?;

        let next = self.cart.with_amount(product_id, new_amount);
        self.commit(next)
    }

    /// Persists `next`, then makes it the current cart.
    fn commit(&mut self, next: Cart) -> Result<Cart, CartError> {
        save_cart(self.store.as_ref(), &self.storage_key, &next)?;
        self.cart = next;
        Ok(self.cart.clone())
    }
}

fn log_outcome(result: &Result<Cart, CartError>) {
    match result {
        Ok(cart) => info!(items = cart.len(), quantity = cart.total_quantity(), "Cart updated"),
        Err(e) if e.kind() == ErrorKind::Transient => error!(error = %e, "Cart operation failed"),
        Err(e) => warn!(error = %e, "Cart operation rejected"),
    }
}
