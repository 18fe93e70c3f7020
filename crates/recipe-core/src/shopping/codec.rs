//! Persisted list codec
//!
//! The slot holds a JSON array of `{name, qty, done}`. Decoding is lenient per
//! field and strict per shape: a slot that is not an array is corrupt, a record
//! with a bad field is repaired, a record that is not an object is dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::item::ShoppingItem;
use super::list::ShoppingList;
use crate::ingredient::normalize_name;

/// Name given to records stored without a usable name
pub const PLACEHOLDER_NAME: &str = "unnamed item";

/// Outcome of reading the slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    List(ShoppingList),
    /// Not a list at all; the caller discards the slot
    Corrupt,
}

/// One stored record before validation
#[derive(Debug, Default, Deserialize)]
struct PersistedItem {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    qty: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    done: Option<bool>,
}

/// A field of the wrong type reads as missing instead of failing the record
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl From<PersistedItem> for ShoppingItem {
    fn from(raw: PersistedItem) -> Self {
        let name = raw
            .name
            .map(|n| normalize_name(&n))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());
        let quantity = raw
            .qty
            .and_then(|q| u32::try_from(q).ok())
            .filter(|&q| q >= 1)
            .unwrap_or(1);
        ShoppingItem {
            name,
            quantity,
            done: raw.done.unwrap_or(false),
        }
    }
}

pub fn decode_list(raw: &str) -> Decoded {
    let records = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(records) => records,
        Err(err) => {
            log::warn!("[SHOPPING] Stored list is not a JSON array: {}", err);
            return Decoded::Corrupt;
        }
    };

    let mut items: Vec<ShoppingItem> = Vec::with_capacity(records.len());
    for record in records {
        let item: ShoppingItem = match serde_json::from_value::<PersistedItem>(record) {
            Ok(persisted) => persisted.into(),
            Err(_) => {
                log::debug!("[SHOPPING] Dropping non-object record");
                continue;
            }
        };
        // Legacy lists may hold names that only differ by case
        match items.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }
    }
    Decoded::List(ShoppingList::from_items(items))
}

pub fn encode_list(list: &ShoppingList) -> Result<String, serde_json::Error> {
    serde_json::to_string(list)
}
