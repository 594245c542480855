use async_trait::async_trait;

use super::CatalogError;
use crate::domain::{CatalogProduct, ProductId, Stock};

/// Current stock level per product (`/stock/{id}` upstream).
#[async_trait]
pub trait StockService: Send + Sync {
    async fn get_stock(&self, id: ProductId) -> Result<Option<Stock>, CatalogError>;
}

/// Product details per id (`/products/{id}` upstream).
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_product(&self, id: ProductId) -> Result<Option<CatalogProduct>, CatalogError>;
}
