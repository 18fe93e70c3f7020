//! Shopping Item Entity

use serde::{Deserialize, Serialize};

use crate::ingredient::normalize_name;

/// One line of the shopping list, keyed by its normalized name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Trimmed, lowercased; unique within a list
    pub name: String,
    /// Always >= 1 while the item exists
    #[serde(rename = "qty")]
    pub quantity: u32,
    pub done: bool,
}

impl ShoppingItem {
    /// A fresh, not-done item with quantity 1
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            quantity: 1,
            done: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }
}
