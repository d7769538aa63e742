//! Item Store
//!
//! Sole owner and mutator of the item list.

mod item_store;
mod tests;

pub use item_store::ItemStore;
