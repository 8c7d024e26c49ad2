//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use cookbook::core::Registry;
use cookbook::store::MemoryStore;
use cookbook::{Cookbook, CookbookConfig, EntryDescriptor};

/// Egg, Flour, Pancake, Batter and Cake.
///
/// `Pancake` summarizes to 16 with `{Egg: 10, Flour: 6}` and `Cake` to 9
/// with `{Flour: 4, Egg: 5}`.
pub fn breakfast_entries() -> Vec<EntryDescriptor> {
    vec![
        EntryDescriptor::ingredient("Egg", 5),
        EntryDescriptor::ingredient("Flour", 2),
        EntryDescriptor::recipe("Pancake", [("Egg", 2), ("Flour", 3)]),
        EntryDescriptor::recipe("Batter", [("Flour", 1)]),
        EntryDescriptor::recipe("Cake", [("Batter", 2), ("Egg", 1)]),
    ]
}

/// Build a registry, panicking if any descriptor is rejected.
pub fn registry_from<'a>(descriptors: impl IntoIterator<Item = &'a EntryDescriptor>) -> Registry {
    let mut registry = Registry::new();
    for descriptor in descriptors {
        if let Err(e) = registry.insert(descriptor) {
            panic!("fixture entry {:?} rejected: {}", descriptor.name, e);
        }
    }
    registry
}

/// A test fixture with an in-memory cookbook.
pub struct TestFixture {
    pub cookbook: Cookbook<MemoryStore>,
}

impl TestFixture {
    /// Create a fixture with an empty cookbook.
    pub fn new() -> Self {
        Self::with_config(CookbookConfig::default())
    }

    pub fn with_config(config: CookbookConfig) -> Self {
        Self {
            cookbook: Cookbook::in_memory(config),
        }
    }

    /// Create a fixture preloaded with [`breakfast_entries`].
    pub async fn breakfast() -> Self {
        let fixture = Self::new();
        fixture.load(&breakfast_entries()).await;
        fixture
    }

    /// Register every descriptor, panicking on the first rejection.
    pub async fn load(&self, descriptors: &[EntryDescriptor]) {
        for descriptor in descriptors {
            if let Err(e) = self.cookbook.create_entry(descriptor).await {
                panic!("fixture entry {:?} rejected: {}", descriptor.name, e);
            }
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
