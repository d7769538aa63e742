//! Application Context
//!
//! Owns the shopping session and dispatches user actions to it. Each
//! action writes the session's recomputed view straight into the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use shopping_core::{Category, Celebration, FilterUpdate, ItemId, ListConfig, SessionUpdate, Shop, ShoppingSession};

use crate::store::{store_apply_update, store_finish_celebration, store_set_criteria, store_set_error, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<ShoppingSession>,
    /// Read model for rendering
    pub store: AppStore,
}

impl AppContext {
    pub fn new(session: ShoppingSession, store: AppStore) -> Self {
        Self {
            session: StoredValue::new(session),
            store,
        }
    }

    /// Add an item. Returns false if the session rejected it.
    pub fn add_item(&self, name: String, shop_id: u32, category_id: u32) -> bool {
        match self.session.try_update_value(|s| s.add_item(name, shop_id, category_id)) {
            Some(Ok(update)) => {
                store_set_error(&self.store, None);
                self.apply(update);
                true
            }
            Some(Err(e)) => {
                tracing::warn!("[APP] Add rejected: {}", e);
                store_set_error(&self.store, Some(e.to_string()));
                false
            }
            None => false,
        }
    }

    pub fn toggle_item(&self, id: ItemId) {
        if let Some(update) = self.session.try_update_value(|s| s.toggle_item(&id)) {
            self.apply(update);
        }
    }

    pub fn delete_item(&self, id: ItemId) {
        if let Some(update) = self.session.try_update_value(|s| s.delete_item(&id)) {
            self.apply(update);
        }
    }

    pub fn update_filter(&self, update: FilterUpdate) {
        let result = self.session.try_update_value(|s| {
            let update = s.update_filter(update);
            (update, s.criteria().clone())
        });
        if let Some((update, criteria)) = result {
            store_set_criteria(&self.store, criteria);
            self.apply(update);
        }
    }

    pub fn shops(&self) -> Vec<Shop> {
        self.session.with_value(|s| s.list_shops().to_vec())
    }

    pub fn categories(&self) -> Vec<Category> {
        self.session.with_value(|s| s.list_categories().to_vec())
    }

    /// Shop and category ids the add form starts on
    pub fn default_selection(&self) -> (u32, u32) {
        self.session.with_value(|s| {
            let catalog = s.catalog();
            (
                catalog.default_shop().map(|shop| shop.id).unwrap_or_default(),
                catalog.default_category().map(|category| category.id).unwrap_or_default(),
            )
        })
    }

    pub fn config(&self) -> ListConfig {
        self.session.with_value(|s| s.config().clone())
    }

    fn apply(&self, update: SessionUpdate) {
        let celebration = update.celebration;
        store_apply_update(&self.store, update);
        if let Some(celebration) = celebration {
            self.schedule_celebration_end(celebration);
        }
    }

    /// Fire-and-forget: the timer is never cancelled, the session decides
    /// whether it is still the current one when it fires.
    fn schedule_celebration_end(&self, celebration: Celebration) {
        let ctx = *self;
        let millis = u32::try_from(celebration.duration.as_millis()).unwrap_or(u32::MAX);
        tracing::debug!("[APP] Celebration #{} for {}ms", celebration.generation, millis);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            let _ = ctx.session
                .try_update_value(|s| store_finish_celebration(&ctx.store, s, celebration.generation));
        });
    }
}

/// Get the app context provided by [`App`](crate::app::App)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
