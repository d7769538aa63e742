//! Item Entity
//!
//! A single shopping-list entry with its purchase state.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{Category, Shop};
use super::entity::Entity;

/// Opaque item identifier, unique for the life of the process
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Fresh random id; never collides with an earlier one.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A shopping-list entry
///
/// Name, shop and category are fixed at creation; only `is_bought` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub shop: Shop,
    pub category: Category,
    pub is_bought: bool,
}

impl Item {
    /// Create a new, not yet bought item with a generated id
    pub fn new(name: impl Into<String>, shop: Shop, category: Category) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            shop,
            category,
            is_bought: false,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
