//! Shopping list and storage errors

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures of the local persistence slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to write local storage: {0}")]
    Write(String),
}

pub type ShoppingResult<T> = Result<T, ShoppingError>;

/// Errors surfaced by the shopping list engine.
///
/// None of these are user-facing; the UI logs them and keeps the last good
/// rendering.
#[derive(Debug, Error)]
pub enum ShoppingError {
    /// The UI issued an index it did not just render
    #[error("item index {index} out of range (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode shopping list: {0}")]
    Encode(#[from] serde_json::Error),
}
