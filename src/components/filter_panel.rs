//! Filter Panel Component
//!
//! Shop, category, status and name filters. Every change is applied
//! immediately; there is no "apply" button.

use leptos::prelude::*;
use shopping_core::{FilterUpdate, IdFilter, StatusFilter};

use crate::components::{select_options, CatalogSelect};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

const ALL_LABEL: &str = "All";

#[component]
pub fn FilterPanel() -> impl IntoView {
    let ctx = use_app_context();
    let criteria = move || ctx.store.criteria().get();

    let shops = ctx.shops();
    let categories = ctx.categories();
    let shop_options = select_options(shops.iter().map(|s| (s.id, s.name.as_str())), Some(ALL_LABEL));
    let category_options = select_options(categories.iter().map(|c| (c.id, c.name.as_str())), Some(ALL_LABEL));

    let on_id_change = move |make: fn(IdFilter) -> FilterUpdate| {
        move |value: String| match value.parse::<IdFilter>() {
            Ok(filter) => ctx.update_filter(make(filter)),
            Err(e) => tracing::warn!("[FILTER] {}", e),
        }
    };

    view! {
        <div class="filter-panel">
            <CatalogSelect
                label="Shop"
                options=shop_options
                selected=Signal::derive(move || criteria().shop.to_string())
                on_change=on_id_change(FilterUpdate::shop)
            />

            <CatalogSelect
                label="Category"
                options=category_options
                selected=Signal::derive(move || criteria().category.to_string())
                on_change=on_id_change(FilterUpdate::category)
            />

            <fieldset class="status-filter">
                <legend>"Status"</legend>
                {StatusFilter::OPTIONS.iter().map(|&status| view! {
                    <label class="status-option">
                        <input
                            type="radio"
                            name="status-filter"
                            value=status.as_str()
                            prop:checked=move || criteria().status == status
                            on:change=move |_| ctx.update_filter(FilterUpdate::status(status))
                        />
                        {status.label()}
                    </label>
                }).collect_view()}
            </fieldset>

            <label class="name-filter">
                <span class="select-label">"Name"</span>
                <input
                    type="text"
                    placeholder="Search by name..."
                    prop:value=move || criteria().name
                    on:input=move |ev| ctx.update_filter(FilterUpdate::name(event_target_value(&ev)))
                />
            </label>
        </div>
    }
}
