//! # Cookbook Store
//!
//! Storage abstraction for the cookbook registry. Provides a trait-based
//! interface with an in-memory implementation.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for registry access
//! - [`MemoryStore`] - Registry behind a single `RwLock`
//! - [`StoreExt`] - Batch helpers built on [`Store`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cookbook_core::{EntryDescriptor, DEFAULT_MAX_DEPTH};
//! use cookbook_store::{MemoryStore, Store};
//!
//! async fn example() {
//!     let store = MemoryStore::new();
//!
//!     store.insert_entry(&EntryDescriptor::ingredient("Egg", 5)).await.unwrap();
//!     store
//!         .insert_entry(&EntryDescriptor::recipe("Omelette", [("Egg", 3)]))
//!         .await
//!         .unwrap();
//!
//!     let summary = store.summarize("Omelette", DEFAULT_MAX_DEPTH).await.unwrap();
//!     assert_eq!(summary.cook_time, 15);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Insert-only**: entries are never updated or removed
//! - **All-or-nothing inserts**: a rejected entry leaves the registry unchanged
//! - **No persistence**: the registry lives as long as the store

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{Store, StoreExt};
