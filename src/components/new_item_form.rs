//! New Item Form Component
//!
//! Name input plus shop and category selection.

use leptos::prelude::*;

use crate::components::{select_options, CatalogSelect};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Catalog id from a select value; anything else is logged and dropped.
fn parse_catalog_id(kind: &str, value: &str) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!("[FORM] Ignoring {} value {:?}", kind, value);
            None
        }
    }
}

/// Form for adding items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (default_shop, default_category) = ctx.default_selection();
    let (new_name, set_new_name) = signal(String::new());
    let (shop_id, set_shop_id) = signal(default_shop);
    let (category_id, set_category_id) = signal(default_category);

    let shops = ctx.shops();
    let categories = ctx.categories();
    let shop_options = select_options(shops.iter().map(|s| (s.id, s.name.as_str())), None);
    let category_options = select_options(categories.iter().map(|c| (c.id, c.name.as_str())), None);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() { return; }
        if ctx.add_item(name, shop_id.get(), category_id.get()) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add an item..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
            </div>

            <CatalogSelect
                label="Shop"
                options=shop_options
                selected=Signal::derive(move || shop_id.get().to_string())
                on_change=move |value: String| {
                    if let Some(id) = parse_catalog_id("shop", &value) {
                        set_shop_id.set(id);
                    }
                }
            />

            <CatalogSelect
                label="Category"
                options=category_options
                selected=Signal::derive(move || category_id.get().to_string())
                on_change=move |value: String| {
                    if let Some(id) = parse_catalog_id("category", &value) {
                        set_category_id.set(id);
                    }
                }
            />

            <button type="submit">"Add item"</button>

            {move || ctx.store.last_error().get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
        </form>
    }
}
