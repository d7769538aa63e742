//! Shopping List Core
//!
//! Layered the same way as the UI consumes it:
//! - domain: catalog, items and errors
//! - store: the mutable item list
//! - filter / completion: pure derivations over a store snapshot
//! - session: one user's store + criteria, recomputed on every write

pub mod domain;
pub mod store;
pub mod filter;
pub mod completion;
pub mod session;
pub mod config;

pub use domain::{Catalog, Category, DomainError, DomainResult, Entity, Item, ItemId, ReferenceKind, Shop};
pub use store::ItemStore;
pub use filter::{apply, FilterCriteria, FilterUpdate, IdFilter, StatusFilter};
pub use completion::{is_complete, Celebration, CompletionTracker};
pub use session::{ListSummary, SessionUpdate, ShoppingSession};
pub use config::ListConfig;
