//! Persistence slot abstraction
//!
//! The shopping list is stored as one serialized string under a single key.
//! The browser implementation lives in the UI crate; `MemoryStorage` backs
//! the tests.

use std::cell::RefCell;

use crate::error::StorageResult;

/// A single named slot holding the serialized shopping list
pub trait ListStorage {
    /// Raw contents of the slot, `None` if nothing was ever written
    fn read(&self) -> Option<String>;

    /// Replace the slot contents
    fn write(&self, raw: &str) -> StorageResult<()>;

    /// Drop the slot entirely
    fn remove(&self);
}

impl<S: ListStorage + ?Sized> ListStorage for &S {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, raw: &str) -> StorageResult<()> {
        (**self).write(raw)
    }

    fn remove(&self) {
        (**self).remove()
    }
}

/// In-memory slot
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing raw contents
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ListStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, raw: &str) -> StorageResult<()> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}
