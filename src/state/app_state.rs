//! Shared application state handed to the HTTP layer

use std::time::Instant;

use super::{Item, StoreHandle};

/// Everything the request handlers need: the cart store and the shelf
#[derive(Debug)]
pub struct AppState {
    /// Handle to the cart store task
    pub store: StoreHandle,
    /// Items the UI offers to add
    pub shelf: Vec<Item>,
    /// Server metadata
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: StoreHandle, shelf: Vec<Item>) -> Self {
        Self {
            store,
            shelf,
            start_time: Instant::now(),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
