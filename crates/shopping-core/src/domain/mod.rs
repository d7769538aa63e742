//! Domain Layer
//!
//! Contains the catalog, item entity and core abstractions.
//! Nothing here knows about rendering or the browser.

mod entity;
mod catalog;
mod item;

pub use entity::{find_by_id, Entity, DomainError, DomainResult, ReferenceKind};
pub use catalog::{Catalog, Category, Shop};
pub use item::{Item, ItemId};
