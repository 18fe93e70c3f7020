//! Shopping List Engine
//!
//! Every operation re-reads the slot, mutates the whole list and writes it back
//! before returning. There is no cached copy between operations.

use super::codec::{decode_list, encode_list, Decoded};
use super::item::ShoppingItem;
use super::list::{AddOutcome, ShoppingList};
use super::removal::{RemovalTicket, ShoppingSession};
use crate::error::{ShoppingError, ShoppingResult};
use crate::storage::ListStorage;

/// Result of a decrease tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// Quantity went down to this value
    Decremented(u32),
    /// Quantity is 1: nothing changed, tap again within the window to remove.
    /// Schedule `RemovalGuard::expire(ticket)` after the window.
    ConfirmRemoval(RemovalTicket),
    /// Second tap landed; the named item is gone
    Removed(String),
}

/// Proof that the user was asked before clearing
#[derive(Debug)]
#[must_use = "the list is only cleared by confirm_clear"]
pub struct ClearConfirmation {
    _private: (),
}

pub struct ShoppingListEngine<S: ListStorage> {
    storage: S,
}

impl<S: ListStorage> ShoppingListEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current list; a corrupt slot is discarded and reads as empty
    pub fn load(&self) -> ShoppingList {
        let Some(raw) = self.storage.read() else {
            return ShoppingList::new();
        };
        match decode_list(&raw) {
            Decoded::List(list) => list,
            Decoded::Corrupt => {
                log::warn!("[SHOPPING] Discarding corrupted shopping list");
                self.storage.remove();
                ShoppingList::new()
            }
        }
    }

    fn save(&self, list: &ShoppingList) -> ShoppingResult<()> {
        let raw = encode_list(list)?;
        self.storage.write(&raw)?;
        Ok(())
    }

    fn resolve(list: &ShoppingList, display_index: usize) -> ShoppingResult<usize> {
        list.storage_index(display_index)
            .ok_or(ShoppingError::IndexOutOfRange {
                index: display_index,
                len: list.len(),
            })
    }

    /// Items in display order (not-done first)
    pub fn displayed(&self) -> Vec<ShoppingItem> {
        self.load().displayed().into_iter().cloned().collect()
    }

    /// Add one typed-in name
    pub fn add_manual(&self, name: &str) -> ShoppingResult<AddOutcome> {
        if name.trim().is_empty() {
            return Ok(AddOutcome::Ignored);
        }
        let mut list = self.load();
        let outcome = list.merge(name);
        self.save(&list)?;
        log::debug!("[SHOPPING] add_manual {:?} -> {:?}", name.trim(), outcome);
        Ok(outcome)
    }

    /// Merge the checked ingredients of a recipe in one write.
    /// Returns how many selections were merged.
    pub fn add_from_selection<I, T>(&self, selected: I) -> ShoppingResult<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut list = self.load();
        let mut merged = 0;
        for name in selected {
            if list.merge(name.as_ref()) != AddOutcome::Ignored {
                merged += 1;
            }
        }
        if merged > 0 {
            self.save(&list)?;
        }
        log::debug!("[SHOPPING] Merged {} selected ingredients", merged);
        Ok(merged)
    }

    pub fn increase_qty(&self, display_index: usize) -> ShoppingResult<u32> {
        let mut list = self.load();
        let index = Self::resolve(&list, display_index)?;
        let item = list.item_mut(index);
        item.quantity = item.quantity.saturating_add(1);
        let quantity = item.quantity;
        self.save(&list)?;
        Ok(quantity)
    }

    pub fn decrease_qty(
        &self,
        session: &mut ShoppingSession,
        display_index: usize,
        now_ms: u64,
    ) -> ShoppingResult<DecreaseOutcome> {
        let mut list = self.load();
        let index = Self::resolve(&list, display_index)?;

        let item = list.item_mut(index);
        if item.quantity > 1 {
            item.quantity -= 1;
            let quantity = item.quantity;
            self.save(&list)?;
            return Ok(DecreaseOutcome::Decremented(quantity));
        }

        if session.removal.confirms(display_index, &item.name, now_ms) {
            let removed = list.remove(index);
            self.save(&list)?;
            session.removal.disarm();
            log::debug!("[SHOPPING] Removed {:?}", removed.name);
            return Ok(DecreaseOutcome::Removed(removed.name));
        }

        let ticket = session.removal.arm(display_index, &item.name, now_ms);
        Ok(DecreaseOutcome::ConfirmRemoval(ticket))
    }

    /// Returns the new done flag
    pub fn toggle_done(&self, display_index: usize) -> ShoppingResult<bool> {
        let mut list = self.load();
        let index = Self::resolve(&list, display_index)?;
        let done = list.toggle_done(index);
        self.save(&list)?;
        Ok(done)
    }

    /// First phase of clearing; touches nothing
    pub fn request_clear(&self) -> ClearConfirmation {
        ClearConfirmation { _private: () }
    }

    pub fn confirm_clear(&self, _confirmation: ClearConfirmation) -> ShoppingResult<()> {
        self.save(&ShoppingList::new())?;
        log::info!("[SHOPPING] Shopping list cleared");
        Ok(())
    }
}
