//! Shopping List ordering and merge rules
//!
//! Storage order is what `toggle_done` mutates. Display order is a stable
//! partition of storage order with not-done items first. Every index coming
//! from the UI is a display index.

use serde::{Deserialize, Serialize};

use super::item::ShoppingItem;
use crate::ingredient::normalize_name;

/// Result of merging one name into the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Blank input, nothing changed
    Ignored,
    /// New item appended
    Added,
    /// Existing item now has this quantity
    Incremented(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from items already known to satisfy the list invariants
    pub(crate) fn from_items(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }

    /// Items in storage order
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Storage index of the item with this (normalized) name
    pub fn position(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.items.iter().position(|item| item.name == key)
    }

    pub fn get(&self, name: &str) -> Option<&ShoppingItem> {
        self.position(name).map(|i| &self.items[i])
    }

    /// Increment the matching item or append a new one
    pub fn merge(&mut self, name: &str) -> AddOutcome {
        let key = normalize_name(name);
        if key.is_empty() {
            return AddOutcome::Ignored;
        }
        match self.items.iter_mut().find(|item| item.name == key) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                AddOutcome::Incremented(item.quantity)
            }
            None => {
                self.items.push(ShoppingItem::new(&key));
                AddOutcome::Added
            }
        }
    }

    /// Storage indices in display order: not-done first, each group in storage order
    pub fn display_order(&self) -> Vec<usize> {
        let (open, done): (Vec<usize>, Vec<usize>) =
            (0..self.items.len()).partition(|&i| !self.items[i].done);
        open.into_iter().chain(done).collect()
    }

    /// Items as rendered
    pub fn displayed(&self) -> Vec<&ShoppingItem> {
        self.display_order().into_iter().map(|i| &self.items[i]).collect()
    }

    /// Map a rendered index back to storage
    pub fn storage_index(&self, display_index: usize) -> Option<usize> {
        self.display_order().get(display_index).copied()
    }

    pub(crate) fn item_mut(&mut self, storage_index: usize) -> &mut ShoppingItem {
        &mut self.items[storage_index]
    }

    pub(crate) fn remove(&mut self, storage_index: usize) -> ShoppingItem {
        self.items.remove(storage_index)
    }

    /// Flip done; newly done sinks to the end, newly undone floats to the front
    pub(crate) fn toggle_done(&mut self, storage_index: usize) -> bool {
        let mut item = self.items.remove(storage_index);
        item.done = !item.done;
        let done = item.done;
        if done {
            self.items.push(item);
        } else {
            self.items.insert(0, item);
        }
        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(items: &[(&str, u32, bool)]) -> ShoppingList {
        ShoppingList::from_items(
            items
                .iter()
                .map(|(name, qty, done)| ShoppingItem {
                    name: name.to_string(),
                    quantity: *qty,
                    done: *done,
                })
                .collect(),
        )
    }

    fn names(items: &[&ShoppingItem]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_merge_dedupes_by_normalized_name() {
        let mut list = ShoppingList::new();
        assert_eq!(list.merge("Milk"), AddOutcome::Added);
        assert_eq!(list.merge(" milk "), AddOutcome::Incremented(2));
        assert_eq!(list.merge("   "), AddOutcome::Ignored);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("MILK").unwrap().quantity, 2);
    }

    #[test]
    fn test_display_order_is_stable_partition() {
        let list = make_list(&[
            ("a", 1, true),
            ("b", 1, false),
            ("c", 1, true),
            ("d", 1, false),
        ]);
        assert_eq!(list.display_order(), vec![1, 3, 0, 2]);
        assert_eq!(names(&list.displayed()), vec!["b", "d", "a", "c"]);
        assert_eq!(list.storage_index(2), Some(0));
        assert_eq!(list.storage_index(4), None);
    }

    #[test]
    fn test_toggle_done_moves_to_end_then_front() {
        let mut list = make_list(&[("a", 1, false), ("b", 1, false), ("c", 1, false)]);
        assert!(list.toggle_done(0));
        assert_eq!(list.items().last().unwrap().name, "a");

        let a = list.position("a").unwrap();
        assert!(!list.toggle_done(a));
        assert_eq!(list.items()[0].name, "a");
        assert!(!list.items()[0].done);
    }
}
