//! Cart items and the actions that change the cart

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cart entry. Only the name is tracked, so two items with the
/// same name are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Item {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Intended change to the cart.
///
/// On the wire an action is `{"type": "ADD_ITEM", "item": "apple"}`. Any
/// `type` that is not recognized decodes to [`Action::Unknown`], which the
/// reducer treats as the identity transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddItem { item: Item },
    RemoveItem { item: Item },
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Build an `AddItem` action
    pub fn add(item: impl Into<Item>) -> Self {
        Action::AddItem { item: item.into() }
    }

    /// Build a `RemoveItem` action
    pub fn remove(item: impl Into<Item>) -> Self {
        Action::RemoveItem { item: item.into() }
    }

    /// Wire tag, used for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddItem { .. } => "ADD_ITEM",
            Action::RemoveItem { .. } => "REMOVE_ITEM",
            Action::Unknown => "UNKNOWN",
        }
    }
}
