use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// Ordered list of cart lines, unique by product id.
///
/// All edits return a new `Cart` so the owner can persist the result before
/// replacing its current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from `items`, rejecting zero amounts and duplicate ids.
    pub fn from_items(items: Vec<Product>) -> Result<Self, String> {
        let cart = Self { items };
        cart.validate()?;
        Ok(cart)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replaces the amount of the line with `id`; other lines are left as is.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| if item.id == id { item.with_amount(amount) } else { item.clone() })
            .collect();
        Self { items }
    }

    pub fn with_appended(&self, product: Product) -> Self {
        let mut items = self.items.clone();
        items.push(product);
        Self { items }
    }

    /// Drops the line with `id`. Absent ids yield an identical cart.
    pub fn without(&self, id: ProductId) -> Self {
        let items = self.items.iter().filter(|item| item.id != id).cloned().collect();
        Self { items }
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(Product::line_total).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.amount == 0 {
                return Err(format!("product {} has a zero amount", item.id));
            }
            if !seen.insert(item.id) {
                return Err(format!("product {} appears more than once", item.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogProduct;

    fn line(id: ProductId, amount: u32) -> Product {
        Product::from_catalog(CatalogProduct::new(id, format!("Product {id}"), 10.0, "img")).with_amount(amount)
    }

    #[test]
    fn test_edits_preserve_order() {
        let cart = Cart::from_items(vec![line(1, 1), line(2, 2), line(3, 1)]).unwrap();

        let bumped = cart.with_amount(2, 5);
        let ids: Vec<_> = bumped.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(bumped.find(2).map(|p| p.amount), Some(5));
        // source cart is untouched
        assert_eq!(cart.find(2).map(|p| p.amount), Some(2));

        let trimmed = cart.without(2);
        let ids: Vec<_> = trimmed.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_without_unknown_id_is_noop() {
        let cart = Cart::from_items(vec![line(1, 1)]).unwrap();
        assert_eq!(cart.without(42), cart);
    }

    #[test]
    fn test_totals() {
        let cart = Cart::from_items(vec![line(1, 2), line(2, 3)]).unwrap();
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.subtotal(), 50.0);
    }

    #[test]
    fn test_validate_rejects_broken_carts() {
        assert!(Cart::from_items(vec![line(1, 0)]).is_err());
        assert!(Cart::from_items(vec![line(1, 1), line(1, 2)]).is_err());
        assert!(Cart::from_items(vec![]).is_ok());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let cart = Cart::from_items(vec![line(7, 1)]).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], 7);
    }
}
