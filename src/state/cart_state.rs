//! Cart state snapshot

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Item;

/// Ordered cart contents. Insertion order is display order and duplicates
/// are allowed.
///
/// A `CartState` is immutable: the reducer builds a new one for every change
/// and hands back the same allocation when nothing changed, so cloning a
/// snapshot is cheap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Arc<[Item]>,
}

impl CartState {
    /// Create an empty cart
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item equal to `item`
    pub fn position(&self, item: &Item) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// True when both snapshots share the same allocation
    pub fn same_as(&self, other: &CartState) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for CartState {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other) || self.items == other.items
    }
}

impl Eq for CartState {}

impl From<Vec<Item>> for CartState {
    fn from(items: Vec<Item>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<'a> FromIterator<&'a str> for CartState {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(Item::from).collect::<Vec<_>>().into()
    }
}
