use serde::{Deserialize, Serialize};

/// Identifier shared by catalog, stock, and cart records.
pub type ProductId = u64;

/// A product as listed by the catalog, before it has a cart quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
}

impl CatalogProduct {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }
}

/// One line of the cart: a catalog product plus the quantity selected.
///
/// `amount` is the only field that changes after the line is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub amount: u32,
}

impl Product {
    /// Starts a new cart line for `product` with a quantity of one.
    pub fn from_catalog(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            amount: 1,
        }
    }

    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_camel_case_keys() {
        let product = Product::from_catalog(CatalogProduct::new(5, "Runner", 179.9, "https://img/5.jpg"));
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["imageUrl"], "https://img/5.jpg");
        assert_eq!(json["amount"], 1);
    }

    #[test]
    fn test_with_amount_only_touches_amount() {
        let product = Product::from_catalog(CatalogProduct::new(5, "Runner", 10.0, "img"));
        let bumped = product.with_amount(3);

        assert_eq!(bumped.amount, 3);
        assert_eq!(bumped.name, product.name);
        assert_eq!(bumped.line_total(), 30.0);
    }
}
