//! Global Application State Store
//!
//! Read model rendered by the components. Only written from
//! [`AppContext`](crate::context::AppContext) after the session has
//! recomputed.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::{FilterCriteria, Item, ListSummary, SessionUpdate, ShoppingSession};

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items passing the current filter, in insertion order
    pub visible_items: Vec<Item>,
    pub summary: ListSummary,
    /// Mirror of the session's criteria for the filter controls
    pub criteria: FilterCriteria,
    /// Confetti and banner are showing
    pub celebrating: bool,
    /// Message from the last rejected add
    pub last_error: Option<String>,
}

impl AppState {
    pub fn from_session(session: &ShoppingSession) -> Self {
        Self {
            visible_items: session.current_filtered_items(),
            summary: session.summary(),
            criteria: session.criteria().clone(),
            celebrating: session.celebration_active(),
            last_error: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Write a recomputed view into the store
pub fn store_apply_update(store: &AppStore, update: SessionUpdate) {
    store.visible_items().set(update.visible);
    store.summary().set(update.summary);
    if update.celebration.is_some() {
        store.celebrating().set(true);
    }
}

pub fn store_set_criteria(store: &AppStore, criteria: FilterCriteria) {
    store.criteria().set(criteria);
}

pub fn store_set_error(store: &AppStore, error: Option<String>) {
    store.last_error().set(error);
}

/// Timer body for a celebration. Lowers the flag only if the session
/// confirms `generation` is still the one on screen.
pub fn store_finish_celebration(store: &AppStore, session: &mut ShoppingSession, generation: u64) -> bool {
    let ended = session.end_celebration(generation);
    if ended {
        store.celebrating().set(false);
    }
    ended
}
