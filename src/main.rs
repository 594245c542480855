use std::sync::Arc;

use tracing::{error, info, Instrument};

use cart_store::{
    setup_tracing, CartConfig, CartPresenter, CartSystem, CatalogClient, CatalogProduct, Stock,
    TracingNotifier, UpdateProductAmount,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CartConfig::from_env()?;
    info!(?config, "Starting cart demo");

    let (catalog, catalog_handles) = CatalogClient::spawn(
        config.buffer_size,
        vec![Stock::new(1, 3), Stock::new(2, 1), Stock::new(3, 5)],
        vec![
            CatalogProduct::new(1, "Tenis de Caminhada Leve Confortavel", 179.9, "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg"),
            CatalogProduct::new(2, "Tenis VR Caminhada Confortavel", 139.9, "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis2.jpg"),
            CatalogProduct::new(3, "Tenis Adidas Duramo Lite 2.0", 219.9, "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis3.jpg"),
        ],
    );
    let catalog = Arc::new(catalog);

    let system = CartSystem::start(&config, catalog.clone(), catalog, CartSystem::store_for(&config));
    let presenter = CartPresenter::new(system.cart_client.clone(), Arc::new(TracingNotifier));

    let span = tracing::info_span!("shopping");
    async {
        // Failures are reported through the notifier; the demo keeps going.
        let _ = presenter.add_product(1).await;
        let _ = presenter.add_product(2).await;
        let _ = presenter.add_product(2).await;
        let _ = presenter.update_product_amount(UpdateProductAmount { product_id: 1, amount: 2 }).await;
        let _ = presenter.update_product_amount(UpdateProductAmount { product_id: 3, amount: 0 }).await;
        let _ = presenter.remove_product(2).await;
    }
    .instrument(span)
    .await;

    match presenter.cart().await {
        Ok(cart) => info!(
            items = cart.len(),
            quantity = cart.total_quantity(),
            subtotal = cart.subtotal(),
            "Final cart"
        ),
        Err(e) => error!(error = %e, "Could not read cart"),
    }

    drop(presenter);
    system.shutdown().await?;
    // The catalog actors stop once the cart service has dropped its clients.
    for handle in catalog_handles {
        handle.await?;
    }

    info!("Demo completed");
    Ok(())
}
