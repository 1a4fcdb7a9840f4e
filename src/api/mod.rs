//! HTTP API module
//!
//! This module contains the HTTP endpoint handlers, the HTML page and the
//! response structures.

pub mod handlers;
pub mod render;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/ui/add", post(ui_add_handler))
        .route("/ui/remove", post(ui_remove_handler))
        .route("/cart", get(cart_handler))
        .route("/cart/actions", post(action_handler))
        .route("/cart/items", post(add_item_handler))
        .route("/cart/items/:item", delete(remove_item_handler))
        .route("/cart/events", get(events_handler))
        .route("/shelf", get(shelf_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
