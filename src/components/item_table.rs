//! Item Table Component
//!
//! The filtered list, one row per item.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <table class="item-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Shop"</th>
                    <th>"Category"</th>
                    <th>"Bought"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || ctx.store.visible_items().get()
                    // Bought state is part of the key so a toggled row re-renders
                    key=|item| (item.id.clone(), item.is_bought)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </tbody>
        </table>
        <Show when=move || ctx.store.visible_items().get().is_empty()>
            <p class="empty-list">"Nothing to show."</p>
        </Show>
    }
}
