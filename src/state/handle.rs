//! Async handle to a store running in its own task

use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot};

use super::{Action, CartState};

/// Errors from talking to the store task
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cart store is no longer running")]
    Closed,
}

/// Outcome of one dispatch
#[derive(Debug, Clone)]
pub struct Dispatched {
    /// State produced by the action
    pub state: CartState,
    /// False when the action left the cart as it was
    pub changed: bool,
}

/// Request sent to the store task
#[derive(Debug)]
pub enum Command {
    Dispatch {
        action: Action,
        reply: oneshot::Sender<Dispatched>,
    },
    GetState {
        reply: oneshot::Sender<CartState>,
    },
}

/// Clonable front end for the store task.
///
/// Every dispatch goes through one queue, so actions from concurrent callers
/// are applied one at a time in arrival order.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    commands: mpsc::Sender<Command>,
    changes: broadcast::Sender<CartState>,
}

impl StoreHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<Command>,
        changes: broadcast::Sender<CartState>,
    ) -> Self {
        Self { commands, changes }
    }

    /// Apply `action` and return the state it produced
    pub async fn dispatch(&self, action: Action) -> Result<Dispatched, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Dispatch { action, reply }).await?;
        rx.await.map_err(|_| StoreError::Closed)
    }

    /// Current snapshot
    pub async fn state(&self) -> Result<CartState, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::GetState { reply }).await?;
        rx.await.map_err(|_| StoreError::Closed)
    }

    /// Receive every state produced from now on
    pub fn watch(&self) -> broadcast::Receiver<CartState> {
        self.changes.subscribe()
    }

    async fn send(&self, command: Command) -> Result<(), StoreError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| StoreError::Closed)
    }
}
