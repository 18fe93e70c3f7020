//! Browser local storage
//!
//! `BrowserStorage` is the persistence slot behind the shopping list engine.
//! Theme persistence shares the same window storage.

use recipe_core::{ListStorage, StorageError, StorageResult, Theme};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// One local storage key
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ListStorage for BrowserStorage {
    fn read(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn write(&self, raw: &str) -> StorageResult<()> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

pub fn load_theme(key: &str) -> Theme {
    BrowserStorage::new(key)
        .read()
        .map(|raw| Theme::from_class(&raw))
        .unwrap_or_default()
}

pub fn save_theme(key: &str, theme: Theme) {
    if let Err(err) = BrowserStorage::new(key).write(theme.as_class()) {
        log::warn!("[THEME] Could not persist theme: {}", err);
    }
}
