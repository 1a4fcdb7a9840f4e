//! The cart transition function

use super::{Action, CartState, Item};

/// Compute the state that follows `state` once `action` is applied.
///
/// Pure and deterministic. `state` is never modified; a changed cart is a
/// freshly built snapshot, an unchanged cart is `state` itself.
pub fn transition(state: &CartState, action: &Action) -> CartState {
    match action {
        Action::AddItem { item } => append(state, item),
        Action::RemoveItem { item } => match state.position(item) {
            Some(index) => without(state, index),
            None => state.clone(),
        },
        Action::Unknown => state.clone(),
    }
}

fn append(state: &CartState, item: &Item) -> CartState {
    let mut items = Vec::with_capacity(state.len() + 1);
    items.extend_from_slice(state.items());
    items.push(item.clone());
    items.into()
}

fn without(state: &CartState, index: usize) -> CartState {
    state
        .items()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect::<Vec<_>>()
        .into()
}
