//! State management module
//!
//! This module contains the cart state, the actions that change it, the pure
//! transition function and the store that ties them together.

pub mod action;
pub mod app_state;
pub mod cart_state;
pub mod handle;
pub mod reducer;
pub mod store;

// Re-export main types
pub use action::{Action, Item};
pub use app_state::AppState;
pub use cart_state::CartState;
pub use handle::{Dispatched, StoreError, StoreHandle};
pub use reducer::transition;
pub use store::{Store, Subscription};
