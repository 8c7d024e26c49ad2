//! Error types for the cookbook core.

use thiserror::Error;

use crate::entry::EntryKind;
use crate::types::EntryName;

/// Errors raised while registering an entry.
///
/// A failed registration never changes the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("entry name must not be empty")]
    InvalidName,

    #[error("an entry named {0} already exists")]
    DuplicateName(EntryName),

    #[error("recipe {recipe} lists required item {item} more than once")]
    DuplicateRequiredItem { recipe: EntryName, item: EntryName },

    #[error("invalid entry type: {0:?}")]
    InvalidType(String),

    #[error("ingredient {name} has negative cook time {cook_time}")]
    NegativeCookTime { name: EntryName, cook_time: i64 },

    #[error("required item {item} in recipe {recipe} has non-positive quantity {quantity}")]
    InvalidQuantity {
        recipe: EntryName,
        item: EntryName,
        quantity: i64,
    },

    #[error("{kind} {name} is missing field {field}")]
    MissingField {
        name: EntryName,
        kind: EntryKind,
        field: &'static str,
    },
}

impl RegistryError {
    /// True for both entry-level and item-level name collisions.
    pub fn is_duplicate_name(&self) -> bool {
        matches!(
            self,
            RegistryError::DuplicateName(_) | RegistryError::DuplicateRequiredItem { .. }
        )
    }
}

/// Errors raised while expanding an entry into its ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("cyclic reference: {}", display_path(.0))]
    CyclicReference(Vec<EntryName>),

    #[error("recipe nesting exceeds maximum depth of {0}")]
    DepthExceeded(usize),

    #[error("arithmetic overflow while resolving {0}")]
    Overflow(EntryName),
}

/// Errors raised by a top-level summary query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("entry not found: {0}")]
    NotFound(String),

    #[error("{0} is an ingredient, only recipes can be summarized")]
    InvalidQueryTarget(EntryName),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

fn display_path(path: &[EntryName]) -> String {
    path.iter()
        .map(EntryName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> EntryName {
        EntryName::new(s).unwrap()
    }

    #[test]
    fn test_cycle_message_lists_path() {
        let err = ResolveError::CyclicReference(vec![name("A"), name("B"), name("A")]);
        assert_eq!(err.to_string(), "cyclic reference: A -> B -> A");
    }

    #[test]
    fn test_duplicate_name_covers_item_collisions() {
        assert!(RegistryError::DuplicateName(name("Egg")).is_duplicate_name());
        assert!(RegistryError::DuplicateRequiredItem {
            recipe: name("Pancake"),
            item: name("Egg"),
        }
        .is_duplicate_name());
        assert!(!RegistryError::InvalidType("meal".into()).is_duplicate_name());
    }
}
