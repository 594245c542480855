use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceActor, ResourceClient};
use crate::catalog::{CatalogError, ProductService, StockService};
use crate::domain::{CatalogProduct, ProductId, Stock};

/// Client for the in-process stock and product record actors.
#[derive(Clone)]
pub struct CatalogClient {
    stock: ResourceClient<Stock>,
    products: ResourceClient<CatalogProduct>,
}

impl CatalogClient {
    pub fn new(stock: ResourceClient<Stock>, products: ResourceClient<CatalogProduct>) -> Self {
        Self { stock, products }
    }

    /// Spawns one record actor for stock and one for products, seeded with the given rows.
    pub fn spawn(
        buffer_size: usize,
        stock: impl IntoIterator<Item = Stock>,
        products: impl IntoIterator<Item = CatalogProduct>,
    ) -> (Self, Vec<JoinHandle<()>>) {
        let (stock_actor, stock_client) = ResourceActor::with_records(buffer_size, stock);
        let (product_actor, product_client) = ResourceActor::with_records(buffer_size, products);
        let handles = vec![
            tokio::spawn(stock_actor.run()),
            tokio::spawn(product_actor.run()),
        ];
        (Self::new(stock_client, product_client), handles)
    }

    #[instrument(skip(self), fields(product_id = stock.id))]
    pub async fn put_stock(&self, stock: Stock) -> Result<(), CatalogError> {
        debug!(amount = stock.amount, "Sending request");
        self.stock.put(stock).await.map(|_| ()).map_err(into_catalog_error)
    }

    #[instrument(skip(self), fields(product_id = product.id))]
    pub async fn put_product(&self, product: CatalogProduct) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.products.put(product).await.map(|_| ()).map_err(into_catalog_error)
    }
}

#[async_trait]
impl StockService for CatalogClient {
    #[instrument(skip(self))]
    async fn get_stock(&self, id: ProductId) -> Result<Option<Stock>, CatalogError> {
        debug!("Sending request");
        self.stock.get(id).await.map_err(into_catalog_error)
    }
}

#[async_trait]
impl ProductService for CatalogClient {
    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<Option<CatalogProduct>, CatalogError> {
        debug!("Sending request");
        self.products.get(id).await.map_err(into_catalog_error)
    }
}

fn into_catalog_error(e: FrameworkError) -> CatalogError {
    match e {
        FrameworkError::Backend(msg) => CatalogError::Unavailable(msg),
        other => CatalogError::ActorCommunicationError(other.to_string()),
    }
}
