//! Task that owns the store and serializes access to it

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::state::{handle::Command, Dispatched, Store, StoreHandle};

/// Pending commands the queue holds before callers wait
const COMMAND_QUEUE: usize = 64;

/// Move `store` into a background task and return a handle to it.
///
/// A listener is registered on the store that forwards every new state to
/// the broadcast channel behind [`StoreHandle::watch`]. The task stops once
/// every handle has been dropped.
pub fn spawn_store(store: Store, event_buffer: usize) -> StoreHandle {
    let (commands_tx, commands_rx) = mpsc::channel(COMMAND_QUEUE);
    let (changes_tx, _) = broadcast::channel(event_buffer.max(1));

    let forward = changes_tx.clone();
    store
        .subscribe(move |state| {
            // No receivers is fine; nobody is watching yet.
            let _ = forward.send(state.clone());
        })
        .detach();

    tokio::spawn(store_task(store, commands_rx));
    StoreHandle::new(commands_tx, changes_tx)
}

async fn store_task(mut store: Store, mut commands: mpsc::Receiver<Command>) {
    info!("Starting cart store task");

    while let Some(command) = commands.recv().await {
        match command {
            Command::Dispatch { action, reply } => {
                let before = store.state().clone();
                let state = store.dispatch(action).clone();
                let changed = !state.same_as(&before);
                if reply.send(Dispatched { state, changed }).is_err() {
                    debug!("Dispatch caller went away before the reply");
                }
            }
            Command::GetState { reply } => {
                let _ = reply.send(store.state().clone());
            }
        }
    }

    info!("All store handles dropped, cart store task stopped");
}
