use tracing::{debug, warn};

use crate::domain::{Cart, Product};
use crate::storage::KeyValueStore;
use super::CartError;

/// Reads the cart stored under `key`.
///
/// Never fails: a missing, unreadable, malformed, or inconsistent blob all
/// start the session with an empty cart.
pub fn load_cart(store: &dyn KeyValueStore, key: &str) -> Cart {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No stored cart");
            return Cart::new();
        }
        Err(e) => {
            warn!(key, error = %e, "Could not read stored cart, starting empty");
            return Cart::new();
        }
    };

    let items: Vec<Product> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "Stored cart is malformed, starting empty");
            return Cart::new();
        }
    };

    match Cart::from_items(items) {
        Ok(cart) => {
            debug!(key, items = cart.len(), "Loaded stored cart");
            cart
        }
        Err(reason) => {
            warn!(key, %reason, "Stored cart breaks cart invariants, starting empty");
            Cart::new()
        }
    }
}

pub fn save_cart(store: &dyn KeyValueStore, key: &str, cart: &Cart) -> Result<(), CartError> {
    let blob = serde_json::to_string(cart).map_err(|e| CartError::Storage(e.to_string()))?;
    store.set(key, &blob)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogProduct;
    use crate::storage::InMemoryStore;

    const KEY: &str = "@RocketShoes:cart";

    fn line(id: u64, amount: u32) -> Product {
        Product::from_catalog(CatalogProduct::new(id, format!("Shoe {id}"), 59.9, format!("https://img/{id}.jpg")))
            .with_amount(amount)
    }

    #[test]
    fn test_round_trip_keeps_order_and_amounts() {
        let store = InMemoryStore::new();
        let cart = Cart::from_items(vec![line(3, 2), line(1, 1), line(2, 4)]).unwrap();

        save_cart(&store, KEY, &cart).unwrap();

        assert_eq!(load_cart(&store, KEY), cart);
    }

    #[test]
    fn test_missing_blob_is_empty_cart() {
        assert!(load_cart(&InMemoryStore::new(), KEY).is_empty());
    }

    #[test]
    fn test_malformed_blob_is_empty_cart() {
        let store = InMemoryStore::new();
        store.set(KEY, "{not a cart").unwrap();

        assert!(load_cart(&store, KEY).is_empty());
    }

    #[test]
    fn test_duplicate_ids_in_blob_is_empty_cart() {
        let store = InMemoryStore::new();
        let blob = serde_json::to_string(&vec![line(1, 1), line(1, 2)]).unwrap();
        store.set(KEY, &blob).unwrap();

        assert!(load_cart(&store, KEY).is_empty());
    }

    #[test]
    fn test_reads_camel_case_blob() {
        let store = InMemoryStore::new();
        store
            .set(KEY, r#"[{"id":5,"name":"Tenis","price":139.9,"imageUrl":"https://img/5.jpg","amount":2}]"#)
            .unwrap();

        let cart = load_cart(&store, KEY);
        assert_eq!(cart.find(5).map(|p| p.amount), Some(2));
    }
}
