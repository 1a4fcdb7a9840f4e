//! Background tasks module
//!
//! This module contains the task owning the cart store and the tasks that
//! follow its changes.

pub mod cart_logger;
pub mod store_task;

// Re-export main functions
pub use cart_logger::cart_logger_task;
pub use store_task::spawn_store;
