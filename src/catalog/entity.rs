use crate::actor_framework::Entity;
use crate::domain::{CatalogProduct, ProductId, Stock};

impl Entity for Stock {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl Entity for CatalogProduct {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}
