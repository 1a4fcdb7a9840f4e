//! Cart store: current state plus change listeners

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
};
use tracing::debug;

use super::{reducer::transition, Action, CartState};

type Listener = Box<dyn FnMut(&CartState) + Send>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

fn lock(listeners: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    // Poisoning is ignored; the list stays usable after a listener panics.
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the cart and applies dispatched actions to it.
///
/// The store is single-threaded: `dispatch` takes `&mut self`, and concurrent
/// producers go through [`crate::tasks::spawn_store`] which serializes them.
/// Listeners run synchronously inside `dispatch` and must not call back into
/// the store or their own [`Subscription`].
pub struct Store {
    state: CartState,
    listeners: Arc<Mutex<Listeners>>,
}

impl Store {
    /// Create a store holding an empty cart
    pub fn new() -> Self {
        Self::with_state(CartState::new())
    }

    /// Create a store starting from an existing snapshot
    pub fn with_state(state: CartState) -> Self {
        Self {
            state,
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    /// Apply `action` and notify every listener with the resulting state
    pub fn dispatch(&mut self, action: Action) -> &CartState {
        let next = transition(&self.state, &action);
        debug!(
            action = action.kind(),
            changed = !next.same_as(&self.state),
            items = next.len(),
            "Dispatched cart action"
        );
        self.state = next;

        let mut listeners = lock(&self.listeners);
        for (_, listener) in listeners.entries.iter_mut() {
            listener(&self.state);
        }

        &self.state
    }

    /// Current snapshot
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Register `listener` to run after every dispatch
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&CartState) + Send + 'static,
    {
        let mut listeners = lock(&self.listeners);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle returned by [`Store::subscribe`]; the only way to deregister the
/// listener. Dropping it keeps the listener registered.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Remove the listener. Does nothing if the store is already gone.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).entries.retain(|(id, _)| *id != self.id);
        }
    }

    /// Give up the handle; the listener stays registered for the lifetime of
    /// the store.
    pub fn detach(self) {}
}
