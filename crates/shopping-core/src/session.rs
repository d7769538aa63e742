//! Shopping Session
//!
//! The boundary the presentation layer talks to. Owns one item store, the
//! current filter criteria and completion tracking. Every input event
//! recomputes the filtered view and completion state and hands both back
//! in a [`SessionUpdate`].

use std::sync::Arc;

use crate::completion::{Celebration, CompletionTracker};
use crate::config::ListConfig;
use crate::domain::{Catalog, Category, DomainResult, Item, ItemId, Shop};
use crate::filter::{self, FilterCriteria, FilterUpdate};
use crate::store::ItemStore;

/// Counts shown next to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListSummary {
    pub total: usize,
    pub bought: usize,
    pub visible: usize,
}

/// Derived read model after an input event
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    pub visible: Vec<Item>,
    pub summary: ListSummary,
    /// Set only when this event completed the list
    pub celebration: Option<Celebration>,
}

#[derive(Debug, Clone)]
pub struct ShoppingSession {
    store: ItemStore,
    criteria: FilterCriteria,
    tracker: CompletionTracker,
    config: ListConfig,
    /// Generation of the celebration currently on screen
    active_celebration: Option<u64>,
}

impl Default for ShoppingSession {
    fn default() -> Self {
        Self::new(Catalog::standard(), ListConfig::default())
    }
}

impl ShoppingSession {
    pub fn new(catalog: Arc<Catalog>, config: ListConfig) -> Self {
        Self {
            store: ItemStore::new(catalog),
            criteria: FilterCriteria::default(),
            tracker: CompletionTracker::new(),
            config,
            active_celebration: None,
        }
    }

    // ========================
    // Input events
    // ========================

    pub fn add_item(&mut self, name: impl Into<String>, shop_id: u32, category_id: u32) -> DomainResult<SessionUpdate> {
        self.store.add(name, shop_id, category_id)?;
        Ok(self.recompute())
    }

    pub fn toggle_item(&mut self, id: &ItemId) -> SessionUpdate {
        self.store.toggle_bought(id);
        self.recompute()
    }

    pub fn delete_item(&mut self, id: &ItemId) -> SessionUpdate {
        self.store.remove(id);
        self.recompute()
    }

    /// Criteria do not affect completion, so this never fires a celebration.
    pub fn update_filter(&mut self, update: FilterUpdate) -> SessionUpdate {
        self.criteria.merge(update);
        tracing::debug!("[SESSION] Criteria now {:?}", self.criteria);
        SessionUpdate {
            visible: self.current_filtered_items(),
            summary: self.summary(),
            celebration: None,
        }
    }

    /// Timer callback for the end of a celebration. Only the newest
    /// celebration's timer switches the effect off; returns whether it did.
    pub fn end_celebration(&mut self, generation: u64) -> bool {
        if self.active_celebration == Some(generation) {
            self.active_celebration = None;
            tracing::debug!("[SESSION] Celebration #{} ended", generation);
            true
        } else {
            false
        }
    }

    // ========================
    // Read model
    // ========================

    pub fn current_filtered_items(&self) -> Vec<Item> {
        filter::apply(self.store.list(), &self.criteria)
    }

    pub fn celebration_active(&self) -> bool {
        self.active_celebration.is_some()
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary {
            total: self.store.len(),
            bought: self.store.bought_count(),
            visible: self.store.list().iter().filter(|item| self.criteria.matches(item)).count(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn items(&self) -> &[Item] {
        self.store.list()
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn list_shops(&self) -> &[Shop] {
        self.store.catalog().list_shops()
    }

    pub fn list_categories(&self) -> &[Category] {
        self.store.catalog().list_categories()
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    fn recompute(&mut self) -> SessionUpdate {
        let celebration = self.tracker.observe(self.store.list(), &self.config);
        if let Some(c) = &celebration {
            self.active_celebration = Some(c.generation);
        }
        let visible = self.current_filtered_items();
        SessionUpdate {
            summary: ListSummary {
                total: self.store.len(),
                bought: self.store.bought_count(),
                visible: visible.len(),
            },
            visible,
            celebration,
        }
    }
}
