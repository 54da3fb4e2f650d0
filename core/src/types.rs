//! Domain DTOs for the item API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! The remote store is the only owner of item data, so `Item` carries the id
//! as an opaque string and the client never interprets it.
//! Integration tests catch any schema drift between the two crates.

use serde::{de, Deserialize, Deserializer, Serialize};

/// A single item returned by the API.
///
/// Deserialization accepts `id`, `_id`, or both (document stores expose
/// their native key and may add an `id` virtual next to it); `id` wins.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
}

/// Item as it arrives on the wire, before the id is settled.
#[derive(Deserialize)]
struct WireItem {
    id: Option<String>,
    #[serde(rename = "_id")]
    store_id: Option<String>,
    name: String,
}

/// Errors raised when an item object cannot be accepted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("item has neither `id` nor `_id`")]
    MissingId,
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireItem::deserialize(deserializer)?;
        let id = wire
            .id
            .or(wire.store_id)
            .ok_or_else(|| de::Error::custom(ItemError::MissingId))?;
        Ok(Self { id, name: wire.name })
    }
}

/// Request payload for both creating and renaming an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
}

impl From<ItemName> for NewItem {
    fn from(name: ItemName) -> Self {
        Self { name: name.0 }
    }
}

/// Errors raised when validating an item name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    /// The input was empty or contained only whitespace.
    #[error("item name cannot be empty")]
    Empty,
}

/// An item name that is guaranteed to be non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Trim `input` and reject it if nothing is left.
    pub fn new(input: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
