//! Shopping List
//!
//! - item / list: the ordered, name-unique list and its reordering rules
//! - codec: validated decode of the persisted slot
//! - removal: the "tap again to remove" guard
//! - engine: read-modify-write operations over a `ListStorage`

mod codec;
mod engine;
mod item;
mod list;
mod removal;

#[cfg(test)]
mod tests;

pub use codec::{decode_list, encode_list, Decoded, PLACEHOLDER_NAME};
pub use engine::{ClearConfirmation, DecreaseOutcome, ShoppingListEngine};
pub use item::ShoppingItem;
pub use list::{AddOutcome, ShoppingList};
pub use removal::{RemovalGuard, RemovalTicket, ShoppingSession, DEFAULT_REMOVAL_WINDOW_MS};
