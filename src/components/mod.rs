//! UI Components
//!
//! Leptos components for the shopping list page.

mod catalog_select;
mod new_item_form;
mod filter_panel;
mod item_table;
mod item_row;
mod confetti;

pub use catalog_select::{select_options, CatalogSelect};
pub use new_item_form::NewItemForm;
pub use filter_panel::FilterPanel;
pub use item_table::ItemTable;
pub use item_row::ItemRow;
pub use confetti::{CompletionBanner, Confetti};
