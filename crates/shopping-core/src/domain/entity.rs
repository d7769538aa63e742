//! Domain Layer - Core Entity Trait
//!
//! Every catalog entry and list item has a unique ID.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Linear lookup by ID over an ordered slice of entities
pub fn find_by_id<'a, T: Entity>(entries: &'a [T], id: &T::Id) -> Option<&'a T> {
    entries.iter().find(|entry| entry.id() == *id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Which catalog a dangling reference pointed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Shop,
    Category,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Shop => f.write_str("shop"),
            ReferenceKind::Category => f.write_str("category"),
        }
    }
}

/// Domain-level errors
///
/// Missing item ids are not errors: toggling or removing an item that is
/// already gone is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An add referenced a shop or category that is not in the catalog.
    #[error("unknown {kind} id {id}")]
    InvalidReference { kind: ReferenceKind, id: u32 },

    /// A value from the presentation layer could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration JSON could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reference_message() {
        let err = DomainError::InvalidReference { kind: ReferenceKind::Category, id: 9 };
        assert_eq!(err.to_string(), "unknown category id 9");
    }

    #[derive(Debug, PartialEq)]
    struct Named(u32, &'static str);

    impl Entity for Named {
        type Id = u32;

        fn id(&self) -> Self::Id {
            self.0
        }
    }

    #[test]
    fn test_find_by_id_borrows_from_entries() {
        let entries = vec![Named(1, "one"), Named(2, "two")];
        let found = {
            let wanted = 2;
            find_by_id(&entries, &wanted)
        };
        assert_eq!(found, Some(&Named(2, "two")));
        assert!(find_by_id(&entries, &3).is_none());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = DomainError::InvalidInput("status `done`".to_string());
        assert_eq!(err.to_string(), "invalid input: status `done`");
    }
}
