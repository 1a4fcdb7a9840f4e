//! Cart change logging background task

use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::state::StoreHandle;

/// Background task that logs every state the store produces
pub async fn cart_logger_task(store: StoreHandle) {
    info!("Starting cart logger task");

    let mut changes = store.watch();
    // The receiver alone keeps nothing alive; let the store stop without us.
    drop(store);

    loop {
        match changes.recv().await {
            Ok(state) => {
                info!("Cart updated: {} item(s)", state.len());
                let names: Vec<&str> = state.items().iter().map(|item| item.name()).collect();
                debug!("Cart contents: {:?}", names);
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Cart logger fell behind, skipped {} update(s)", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Cart store closed, stopping cart logger");
                break;
            }
        }
    }
}
