//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, Json, Redirect,
    },
    Form,
};
use futures::stream::{self, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{error, info, warn};

use crate::state::{Action, AppState, CartState, Dispatched, Item, StoreError};
use super::{
    render::render_page,
    responses::{ApiResponse, CartResponse, HealthResponse, ItemRequest},
};

fn store_unavailable(e: StoreError) -> StatusCode {
    error!("Cart store unavailable: {}", e);
    StatusCode::SERVICE_UNAVAILABLE
}

fn require_name(item: &Item) -> Result<(), StatusCode> {
    if item.name().trim().is_empty() {
        warn!("Rejected item with an empty name");
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(())
}

/// Dispatch `action` through the store
async fn apply_action(state: &AppState, action: Action) -> Result<Dispatched, StatusCode> {
    let kind = action.kind();
    let dispatched = state.store.dispatch(action).await.map_err(store_unavailable)?;
    info!("{} dispatched, cart has {} item(s)", kind, dispatched.state.len());
    Ok(dispatched)
}

/// Dispatch `action` and describe the outcome
async fn apply(state: &AppState, action: Action) -> Result<Json<ApiResponse>, StatusCode> {
    let kind = action.kind();
    let message = match &action {
        Action::AddItem { item } => format!("Added {}", item),
        Action::RemoveItem { item } => format!("Removed {}", item),
        Action::Unknown => "Unrecognized action ignored".to_string(),
    };

    let dispatched = apply_action(state, action).await?;

    if dispatched.changed {
        Ok(Json(ApiResponse::changed(message, dispatched.state)))
    } else {
        Ok(Json(ApiResponse::unchanged(
            format!("{} left the cart unchanged", kind),
            dispatched.state,
        )))
    }
}

/// Handle GET / - Render the shelf and the cart
pub async fn page_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let cart = state.store.state().await.map_err(store_unavailable)?;
    Ok(Html(render_page(&state.shelf, &cart)))
}

/// Handle POST /ui/add - Add button on the page
pub async fn ui_add_handler(
    State(state): State<Arc<AppState>>,
    Form(request): Form<ItemRequest>,
) -> Result<Redirect, StatusCode> {
    require_name(&request.item)?;
    apply_action(&state, Action::AddItem { item: request.item }).await?;
    Ok(Redirect::to("/"))
}

/// Handle POST /ui/remove - Remove button on the page
pub async fn ui_remove_handler(
    State(state): State<Arc<AppState>>,
    Form(request): Form<ItemRequest>,
) -> Result<Redirect, StatusCode> {
    apply_action(&state, Action::RemoveItem { item: request.item }).await?;
    Ok(Redirect::to("/"))
}

/// Handle GET /cart - Return current cart contents
pub async fn cart_handler(State(state): State<Arc<AppState>>) -> Result<Json<CartResponse>, StatusCode> {
    let cart = state.store.state().await.map_err(store_unavailable)?;
    Ok(Json(CartResponse::from(cart)))
}

/// Handle POST /cart/actions - Dispatch a raw action
pub async fn action_handler(
    State(state): State<Arc<AppState>>,
    Json(action): Json<Action>,
) -> Result<Json<ApiResponse>, StatusCode> {
    if let Action::AddItem { item } = &action {
        require_name(item)?;
    }
    apply(&state, action).await
}

/// Handle POST /cart/items - Add an item
pub async fn add_item_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ItemRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    require_name(&request.item)?;
    apply(&state, Action::AddItem { item: request.item }).await
}

/// Handle DELETE /cart/items/:item - Remove the first matching item
pub async fn remove_item_handler(
    State(state): State<Arc<AppState>>,
    Path(item): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    apply(&state, Action::remove(item)).await
}

fn cart_event(cart: &CartState) -> Result<Event, axum::Error> {
    Event::default().event("cart").json_data(cart)
}

/// States broadcast after `initial` was read.
///
/// The receiver is subscribed before `initial` is fetched, so a dispatch
/// landing in between shows up both as `initial` and as the first broadcast.
/// That first duplicate is dropped.
fn cart_updates(
    changes: broadcast::Receiver<CartState>,
    initial: CartState,
) -> impl Stream<Item = CartState> {
    stream::unfold((changes, Some(initial)), |(mut changes, mut initial)| async move {
        loop {
            match changes.recv().await {
                Ok(cart) => {
                    if let Some(first) = initial.take() {
                        if cart.same_as(&first) {
                            continue;
                        }
                    }
                    return Some((cart, (changes, initial)));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Event stream skipped {} cart update(s)", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}

/// Handle GET /cart/events - Stream the cart on every change
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, StatusCode> {
    let changes = state.store.watch();
    let current = state.store.state().await.map_err(store_unavailable)?;

    let events = stream::once(futures::future::ready(current.clone()))
        .chain(cart_updates(changes, current))
        .map(|cart| cart_event(&cart));
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Handle GET /shelf - Items the UI offers
pub async fn shelf_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Item>> {
    Json(state.shelf.clone())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}
