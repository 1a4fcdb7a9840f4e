//! Shopping Cart - a state-managed shopping cart served over HTTP
//!
//! The cart is a list of item names held by a [`state::Store`]. Actions are
//! dispatched into the store, a pure transition function computes the next
//! cart, and subscribers are told about every new state. The HTTP layer is
//! just another dispatcher and subscriber.

pub mod api;
pub mod config;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::{transition, Action, AppState, CartState, Item, Store, StoreHandle};
pub use tasks::spawn_store;
pub use utils::signals::shutdown_signal;
