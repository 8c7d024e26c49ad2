//! In-memory implementation of the Store trait.
//!
//! The registry lives for as long as the store does. A single `RwLock`
//! serializes inserts against lookups and resolutions.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use cookbook_core::{
    Entry, EntryDescriptor, EntryName, Registry, Resolution, Resolver, Summary,
};

use crate::error::{Result, StoreError};
use crate::traits::Store;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    registry: RwLock<Registry>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already populated registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Clone the current registry contents.
    pub fn snapshot(&self) -> Result<Registry> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Registry>> {
        self.registry.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Registry>> {
        self.registry.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_entry(&self, descriptor: &EntryDescriptor) -> Result<()> {
        let mut registry = self.write()?;
        registry.insert(descriptor)?;
        debug!(name = %descriptor.name, entries = registry.len(), "entry stored");
        Ok(())
    }

    async fn get_entry(&self, name: &str) -> Result<Option<Entry>> {
        Ok(self.read()?.lookup(name).cloned())
    }

    async fn has_entry(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.contains(name))
    }

    async fn list_names(&self) -> Result<Vec<EntryName>> {
        Ok(self.read()?.names().into_iter().cloned().collect())
    }

    async fn entry_count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    async fn resolve(&self, name: &str, max_depth: usize) -> Result<Resolution> {
        let registry = self.read()?;
        Ok(Resolver::new(&registry).max_depth(max_depth).resolve(name)?)
    }

    async fn summarize(&self, name: &str, max_depth: usize) -> Result<Summary> {
        let registry = self.read()?;
        Ok(Resolver::new(&registry).max_depth(max_depth).summarize(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use crate::traits::StoreExt;
    use cookbook_core::{EntryKind, QueryError, RegistryError, DEFAULT_MAX_DEPTH};

    /// Log sink shared with a test subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn pancake() -> Vec<EntryDescriptor> {
        vec![
            EntryDescriptor::ingredient("Egg", 5),
            EntryDescriptor::ingredient("Flour", 2),
            EntryDescriptor::recipe("Pancake", [("Egg", 2), ("Flour", 3)]),
        ]
    }

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryStore::new();
        store
            .insert_entry(&EntryDescriptor::ingredient("Egg", 5))
            .await
            .unwrap();

        assert!(store.has_entry("Egg").await.unwrap());
        let entry = store.get_entry("Egg").await.unwrap().unwrap();
        assert!(entry.is_ingredient());
        assert!(store.get_entry("Milk").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_rejects_duplicate() {
        let store = MemoryStore::new();
        let egg = EntryDescriptor::ingredient("Egg", 5);

        store.insert_entry(&egg).await.unwrap();
        let err = store.insert_entry(&egg).await.unwrap_err();

        assert!(matches!(
            err,
            StoreError::Registry(RegistryError::DuplicateName(_))
        ));
        assert_eq!(store.entry_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_all_stops_at_first_error() {
        let store = MemoryStore::new();
        let descriptors = vec![
            EntryDescriptor::ingredient("Egg", 5),
            EntryDescriptor::ingredient("Egg", 6),
            EntryDescriptor::ingredient("Flour", 2),
        ];

        assert!(store.insert_all(&descriptors).await.is_err());
        assert_eq!(store.list_names().await.unwrap(), ["Egg"]);
    }

    #[tokio::test]
    async fn test_memory_store_summary() {
        let store = MemoryStore::new();
        assert_eq!(store.insert_all(&pancake()).await.unwrap(), 3);

        let summary = store.summarize("Pancake", DEFAULT_MAX_DEPTH).await.unwrap();
        assert_eq!(summary.cook_time, 16);

        let err = store.summarize("Egg", DEFAULT_MAX_DEPTH).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Query(QueryError::InvalidQueryTarget(_))
        ));

        let egg = store.resolve("Egg", DEFAULT_MAX_DEPTH).await.unwrap();
        assert_eq!(egg.cook_time, 5);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let store = MemoryStore::new();
        store.insert_all(&pancake()).await.unwrap();

        let snapshot = store.snapshot().unwrap();
        store
            .insert_entry(&EntryDescriptor::ingredient("Milk", 1))
            .await
            .unwrap();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(store.entry_count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_with_registry_serves_existing_entries() {
        let mut registry = Registry::new();
        for descriptor in pancake() {
            registry.insert(&descriptor).unwrap();
        }
        let store = MemoryStore::with_registry(registry);

        assert_eq!(store.entry_count().await.unwrap(), 3);
        let entry = store.get_entry("Pancake").await.unwrap().unwrap();
        assert_eq!(entry.kind(), EntryKind::Recipe);
        assert_eq!(
            store.summarize("Pancake", DEFAULT_MAX_DEPTH).await.unwrap().cook_time,
            16
        );

        let err = store
            .insert_entry(&EntryDescriptor::ingredient("Egg", 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Registry(RegistryError::DuplicateName(_))
        ));
    }

    #[tokio::test]
    async fn test_insert_logged_at_debug() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let store = MemoryStore::new();
        store
            .insert_entry(&EntryDescriptor::ingredient("Egg", 5))
            .await
            .unwrap();

        let output = logs.contents();
        assert!(output.contains("DEBUG"), "unexpected log output: {output}");
        assert!(output.contains("entry stored"), "unexpected log output: {output}");
    }
}
