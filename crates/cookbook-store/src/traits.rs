//! Store trait: the abstract interface over the process-wide registry.
//!
//! The facade and the HTTP shell only talk to a [`Store`], so the registry's
//! owner and its locking strategy can change without touching them.

use async_trait::async_trait;
use cookbook_core::{Entry, EntryDescriptor, EntryName, Resolution, Summary};

use crate::error::Result;

/// Async interface for registry access.
///
/// # Design Notes
///
/// - **Insert-only**: there is no update or delete.
/// - **Serialized access**: an insert is never observed half-applied by a
///   concurrent lookup or resolution.
/// - **Snapshot resolution**: `resolve` and `summarize` run against the
///   registry as it is at call time and never modify it.
#[async_trait]
pub trait Store: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Entry Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate and register an entry.
    async fn insert_entry(&self, descriptor: &EntryDescriptor) -> Result<()>;

    /// Get an entry by name.
    async fn get_entry(&self, name: &str) -> Result<Option<Entry>>;

    /// Check if an entry exists.
    async fn has_entry(&self, name: &str) -> Result<bool>;

    /// All registered names, sorted.
    async fn list_names(&self) -> Result<Vec<EntryName>>;

    /// Number of registered entries.
    async fn entry_count(&self) -> Result<usize>;

    // ─────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Expand any entry, ingredient or recipe, into its resolution.
    async fn resolve(&self, name: &str, max_depth: usize) -> Result<Resolution>;

    /// Answer a top-level summary query. Only recipes are valid targets.
    async fn summarize(&self, name: &str, max_depth: usize) -> Result<Summary>;
}

/// Extension trait for common store patterns.
pub trait StoreExt: Store {
    /// Insert descriptors in order, stopping at the first rejection.
    ///
    /// Entries inserted before the failure stay registered. Returns the
    /// number of entries inserted.
    fn insert_all<'a, I>(
        &self,
        descriptors: I,
    ) -> impl std::future::Future<Output = Result<usize>> + Send
    where
        I: IntoIterator<Item = &'a EntryDescriptor> + Send,
        I::IntoIter: Send;
}

impl<S: Store + ?Sized> StoreExt for S {
    async fn insert_all<'a, I>(&self, descriptors: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a EntryDescriptor> + Send,
        I::IntoIter: Send,
    {
        let mut inserted = 0;
        for descriptor in descriptors {
            self.insert_entry(descriptor).await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}
