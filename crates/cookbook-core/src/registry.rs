//! Registry: the insert-only mapping from entry name to entry.

use std::collections::HashMap;

use crate::entry::{Entry, EntryDescriptor};
use crate::error::RegistryError;
use crate::types::EntryName;
use crate::validation::validate_entry;

/// Insert-only collection of cookbook entries.
///
/// There is no update or delete. A descriptor is fully validated before it
/// is stored, so a failed [`insert`](Registry::insert) leaves the registry
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<EntryName, Entry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register an entry.
    pub fn insert(&mut self, descriptor: &EntryDescriptor) -> Result<(), RegistryError> {
        let (name, entry) = validate_entry(descriptor, |name| self.entries.contains_key(name))?;
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Look up an entry by name.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Look up an entry together with its stored name.
    pub fn get_key_value(&self, name: &str) -> Option<(&EntryName, &Entry)> {
        self.entries.get_key_value(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&EntryName> {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort();
        names
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntryName, &Entry)> {
        self.entries.iter()
    }
}
