//! Item Store
//!
//! Insertion-ordered list of items with add/toggle/remove. Unknown ids on
//! toggle and remove are no-ops; unknown catalog ids on add are rejected.

use std::sync::Arc;

use crate::domain::{find_by_id, Catalog, DomainResult, Item, ItemId};

/// In-memory item list bound to a catalog
#[derive(Debug, Clone)]
pub struct ItemStore {
    catalog: Arc<Catalog>,
    items: Vec<Item>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl ItemStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            items: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Append a new item. Both ids must resolve in the catalog; otherwise
    /// the store is left untouched and the error names the bad reference.
    pub fn add(&mut self, name: impl Into<String>, shop_id: u32, category_id: u32) -> DomainResult<Item> {
        let (shop, category) = match (self.catalog.shop(shop_id), self.catalog.category(category_id)) {
            (Ok(shop), Ok(category)) => (shop.clone(), category.clone()),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("[STORE] Rejected add: {}", e);
                return Err(e);
            }
        };

        let item = Item::new(name, shop, category);
        tracing::debug!("[STORE] Added {} ({:?})", item.id, item.name);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Flip `is_bought` on the matching item. Returns false if no item has
    /// this id.
    pub fn toggle_bought(&mut self, id: &ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                item.is_bought = !item.is_bought;
                tracing::debug!("[STORE] Toggled {} -> bought={}", id, item.is_bought);
                true
            }
            None => {
                tracing::debug!("[STORE] Toggle ignored, no item {}", id);
                false
            }
        }
    }

    /// Remove the matching item, returning it. `None` if already gone.
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == *id);
        match index {
            Some(index) => {
                let removed = self.items.remove(index);
                tracing::debug!("[STORE] Removed {}", id);
                Some(removed)
            }
            None => {
                tracing::debug!("[STORE] Remove ignored, no item {}", id);
                None
            }
        }
    }

    /// Snapshot in insertion order
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        find_by_id(&self.items, id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn bought_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_bought).count()
    }
}
