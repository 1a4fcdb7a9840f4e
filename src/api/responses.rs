//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{CartState, Item};

/// Body of the add/remove endpoints, JSON or form encoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    pub item: Item,
}

/// API response structure for action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub cart: CartState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, cart: CartState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            cart,
        }
    }

    /// The action produced a new cart
    pub fn changed(message: String, cart: CartState) -> Self {
        Self::new("changed".to_string(), message, cart)
    }

    /// The action left the cart as it was
    pub fn unchanged(message: String, cart: CartState) -> Self {
        Self::new("unchanged".to_string(), message, cart)
    }
}

/// Current cart contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: CartState,
    pub count: usize,
}

impl From<CartState> for CartResponse {
    fn from(items: CartState) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
