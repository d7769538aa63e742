//! Item Row Component

use leptos::prelude::*;
use shopping_core::Item;

use crate::context::use_app_context;

/// A single item row; bought items are struck through
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let bought = item.is_bought;
    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();

    view! {
        <tr
            class={if bought { "item-row bought" } else { "item-row" }}
            style={if bought { "text-decoration: line-through;" } else { "text-decoration: none;" }}
        >
            <td class="item-id">{item.id.to_string()}</td>
            <td>{item.name}</td>
            <td>{item.shop.name}</td>
            <td>{item.category.name}</td>
            <td>
                <input
                    type="checkbox"
                    checked=bought
                    on:change=move |_| ctx.toggle_item(toggle_id.clone())
                />
            </td>
            <td>
                <button class="delete-btn" on:click=move |_| ctx.delete_item(delete_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
