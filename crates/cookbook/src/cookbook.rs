//! The Cookbook: unified API over a registry store.
//!
//! Brings a [`Store`] and a [`CookbookConfig`] together into the interface
//! the HTTP shell calls: register an entry, look entries up, summarize a
//! recipe.

use std::sync::Arc;

use cookbook_core::{Entry, EntryDescriptor, EntryName, Resolution, Summary};
use cookbook_store::{MemoryStore, Store};
use tracing::{debug, warn};

use crate::config::CookbookConfig;
use crate::error::{CookbookError, Result};

/// The main Cookbook struct.
///
/// Cloning is cheap and every clone shares the same store.
pub struct Cookbook<S: Store> {
    /// The storage backend.
    store: Arc<S>,
    /// Configuration.
    config: CookbookConfig,
}

impl Cookbook<MemoryStore> {
    /// Create a cookbook backed by an empty in-memory store.
    pub fn in_memory(config: CookbookConfig) -> Self {
        Self::new(MemoryStore::new(), config)
    }
}

impl<S: Store> Cookbook<S> {
    /// Create a new cookbook instance.
    pub fn new(store: S, config: CookbookConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CookbookConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate and register an entry.
    ///
    /// A rejected entry leaves the cookbook unchanged.
    pub async fn create_entry(&self, descriptor: &EntryDescriptor) -> Result<()> {
        match self.store.insert_entry(descriptor).await {
            Ok(()) => {
                debug!(name = %descriptor.name, kind = %descriptor.kind, "entry registered");
                Ok(())
            }
            Err(e) => {
                let e = CookbookError::from(e);
                warn!(name = %descriptor.name, error = %e, "entry rejected");
                Err(e)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Get an entry by name.
    pub async fn entry(&self, name: &str) -> Result<Option<Entry>> {
        Ok(self.store.get_entry(name).await?)
    }

    pub async fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.store.has_entry(name).await?)
    }

    /// List all registered names, sorted.
    pub async fn names(&self) -> Result<Vec<EntryName>> {
        Ok(self.store.list_names().await?)
    }

    pub async fn len(&self) -> Result<usize> {
        Ok(self.store.entry_count().await?)
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Expand any entry into its cook time and ingredients.
    pub async fn resolve(&self, name: &str) -> Result<Resolution> {
        Ok(self.store.resolve(name, self.config.max_depth).await?)
    }

    /// Summarize a recipe.
    ///
    /// Fails for unknown names, for ingredients, and for recipes that
    /// transitively require something missing. No partial summary is
    /// returned.
    pub async fn summary(&self, name: &str) -> Result<Summary> {
        match self.store.summarize(name, self.config.max_depth).await {
            Ok(summary) => {
                debug!(
                    recipe = name,
                    cook_time = summary.cook_time,
                    ingredients = summary.ingredients.len(),
                    "summary computed"
                );
                Ok(summary)
            }
            Err(e) => {
                let e = CookbookError::from(e);
                warn!(recipe = name, error = %e, "summary rejected");
                Err(e)
            }
        }
    }
}

impl<S: Store> Clone for Cookbook<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}
