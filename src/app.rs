//! Shopping List App
//!
//! Single page: add form, filters, item table and the completion effect.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::ShoppingSession;

use crate::components::{CompletionBanner, Confetti, FilterPanel, ItemTable, NewItemForm};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Session lives as long as the page
    let session = ShoppingSession::default();
    let store = Store::new(AppState::from_session(&session));
    provide_context(AppContext::new(session, store));

    tracing::info!("[APP] Session started");

    view! {
        <Confetti />
        <div class="app-layout">
            <main class="main-content">
                <h1>"Shopping List"</h1>

                <CompletionBanner />

                <NewItemForm />

                <FilterPanel />

                <ItemTable />

                <p class="item-count">
                    {move || {
                        let summary = store.summary().get();
                        format!("{} of {} items shown, {} bought", summary.visible, summary.total, summary.bought)
                    }}
                </p>
            </main>
        </div>
    }
}
