//! # Cart Store
//!
//! A shopping-cart state container built as a small actor system.
//!
//! - **Domain types** - Plain data: [`Product`], [`Stock`], [`Cart`]
//! - **Cart actor** - [`CartService`] owns the cart, checks stock before
//!   every increase, and persists each accepted edit; [`CartClient`] is the
//!   handle everything else uses
//! - **Collaborators** - [`StockService`] / [`ProductService`] for lookups,
//!   [`KeyValueStore`] for the serialized cart
//! - **Presentation** - [`CartPresenter`] turns results into
//!   [`Notification`]s
//! - **System** - [`CartSystem`] wiring, [`CartConfig`], and
//!   [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use cart_store::*;
//! # async fn demo() -> Result<(), CartError> {
//! let config = CartConfig::default();
//! let (catalog, _handles) = CatalogClient::spawn(config.buffer_size, vec![Stock::new(1, 3)], vec![
//!     CatalogProduct::new(1, "Runner", 179.9, "https://img/1.jpg"),
//! ]);
//! let catalog = Arc::new(catalog);
//! let system = CartSystem::start(&config, catalog.clone(), catalog, CartSystem::store_for(&config));
//!
//! let cart = system.cart_client.add_product(1).await?;
//! assert_eq!(cart.total_quantity(), 1);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod domain;
pub mod notify;
pub mod storage;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, CartConfig, CartSystem, ConfigError};
pub use cart_actor::{CartError, CartService, ErrorKind, UpdateProductAmount};
pub use catalog::{CatalogError, ProductService, StockService};
pub use clients::{CartClient, CatalogClient};
pub use domain::{Cart, CatalogProduct, Product, ProductId, Stock};
pub use notify::{CartOperation, CartPresenter, ChannelNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use storage::{FileStore, InMemoryStore, KeyValueStore, StorageError};
