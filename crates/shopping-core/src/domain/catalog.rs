//! Catalog
//!
//! Fixed reference lists of shops and categories. Built once per process
//! and never mutated; items copy the entry they were created with.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::entity::{find_by_id, DomainError, DomainResult, Entity, ReferenceKind};

/// A shop an item can be bought at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shop {
    pub id: u32,
    pub name: String,
}

impl Shop {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl Entity for Shop {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl Entity for Category {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

const STANDARD_SHOPS: &[(u32, &str)] = &[
    (1, "Teknosa"),
    (2, "Eczane"),
    (3, "Nike"),
    (4, "Migros"),
    (5, "BİM"),
    (6, "A-101"),
];

const STANDARD_CATEGORIES: &[(u32, &str)] = &[
    (1, "Elektronik"),
    (2, "Sağlık"),
    (3, "Ayakkabı"),
    (4, "Şarküteri"),
    (5, "Fırın"),
    (6, "Kasap"),
];

static STANDARD: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog::new(
        STANDARD_SHOPS.iter().map(|&(id, name)| Shop::new(id, name)).collect(),
        STANDARD_CATEGORIES.iter().map(|&(id, name)| Category::new(id, name)).collect(),
    ))
});

/// Ordered shop and category lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shops: Vec<Shop>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(shops: Vec<Shop>, categories: Vec<Category>) -> Self {
        Self { shops, categories }
    }

    /// The process-wide catalog with the six standard shops and categories.
    pub fn standard() -> Arc<Catalog> {
        Arc::clone(&STANDARD)
    }

    pub fn list_shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn shop(&self, id: u32) -> DomainResult<&Shop> {
        find_by_id(&self.shops, &id).ok_or(DomainError::InvalidReference {
            kind: ReferenceKind::Shop,
            id,
        })
    }

    pub fn category(&self, id: u32) -> DomainResult<&Category> {
        find_by_id(&self.categories, &id).ok_or(DomainError::InvalidReference {
            kind: ReferenceKind::Category,
            id,
        })
    }

    /// Entry the add form preselects
    pub fn default_shop(&self) -> Option<&Shop> {
        self.shops.first()
    }

    /// Entry the add form preselects
    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}
