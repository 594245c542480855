use std::sync::Arc;

use tracing::instrument;

use super::{CartOperation, Notification, Notifier};
use crate::cart_actor::{CartError, UpdateProductAmount};
use crate::clients::CartClient;
use crate::domain::{Cart, ProductId};

/// What a rendering layer holds: the cart client plus a notifier that reports
/// the outcome of every mutation.
#[derive(Clone)]
pub struct CartPresenter {
    client: CartClient,
    notifier: Arc<dyn Notifier>,
}

impl CartPresenter {
    pub fn new(client: CartClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    pub async fn cart(&self) -> Result<Cart, CartError> {
        self.client.cart().await
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let result = self.client.add_product(product_id).await;
        self.report(CartOperation::AddProduct, result)
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let result = self.client.remove_product(product_id).await;
        self.report(CartOperation::RemoveProduct, result)
    }

    #[instrument(skip(self))]
    pub async fn update_product_amount(&self, update: UpdateProductAmount) -> Result<Cart, CartError> {
        let result = self.client.update_product_amount(update).await;
        self.report(CartOperation::UpdateProductAmount, result)
    }

    fn report(&self, operation: CartOperation, result: Result<Cart, CartError>) -> Result<Cart, CartError> {
        self.notifier.notify(&Notification::for_result(operation, &result));
        result
    }
}
