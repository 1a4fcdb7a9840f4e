//! Shopping Cart - a state-managed shopping cart served over HTTP
//!
//! This is the main entry point for the shopping-cart application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use shopping_cart::{
    api::create_router,
    config::Config,
    state::{AppState, Store},
    tasks::{cart_logger_task, spawn_store},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("shopping_cart={},tower_http=info", config.log_level()))
        .init();

    info!("Starting shopping-cart server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, shelf={:?}",
          config.host, config.port, config.shelf);

    // The store task owns the cart; everything else talks to it via handles
    let store = spawn_store(Store::new(), config.event_buffer);

    tokio::spawn(cart_logger_task(store.clone()));

    let state = Arc::new(AppState::new(store, config.shelf_items()));
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /                  - Shelf and cart page");
    info!("  GET    /cart              - Current cart");
    info!("  POST   /cart/actions      - Dispatch an action");
    info!("  POST   /cart/items        - Add an item");
    info!("  DELETE /cart/items/:item  - Remove the first matching item");
    info!("  GET    /cart/events       - Cart change stream (SSE)");
    info!("  GET    /shelf             - Shelf items");
    info!("  GET    /health            - Health check");

    // Open event streams never finish on their own, so stop on the signal
    // instead of waiting for connections to drain
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
