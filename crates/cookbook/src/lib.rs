//! # Cookbook
//!
//! The unified API for registering ingredients and recipes and computing
//! recipe summaries.
//!
//! ## Overview
//!
//! - **Ingredients**: atomic entries with a fixed cook time
//! - **Recipes**: entries built from named sub-items with quantities
//! - **Summaries**: total cook time and flattened ingredient list of a recipe
//!
//! ## Key Concepts
//!
//! - **Insert-only**: entries are never edited or removed.
//! - **Forward references**: a recipe may name entries registered later; it
//!   only fails when summarized while something is still missing.
//! - **Cycles**: a recipe that requires itself, directly or not, cannot be
//!   summarized.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cookbook::{Cookbook, CookbookConfig, EntryDescriptor};
//!
//! async fn example() {
//!     let cookbook = Cookbook::in_memory(CookbookConfig::default());
//!
//!     cookbook.create_entry(&EntryDescriptor::ingredient("Egg", 5)).await.unwrap();
//!     cookbook.create_entry(&EntryDescriptor::ingredient("Flour", 2)).await.unwrap();
//!     cookbook
//!         .create_entry(&EntryDescriptor::recipe("Pancake", [("Egg", 2), ("Flour", 3)]))
//!         .await
//!         .unwrap();
//!
//!     let summary = cookbook.summary("Pancake").await.unwrap();
//!     assert_eq!(summary.cook_time, 16);
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `cookbook::core` - Entries, registry, resolver
//! - `cookbook::store` - Storage abstraction

pub mod config;
pub mod cookbook;
pub mod error;

// Re-export component crates
pub use cookbook_core as core;
pub use cookbook_store as store;

// Re-export main types for convenience
pub use crate::config::CookbookConfig;
pub use crate::cookbook::Cookbook;
pub use crate::error::{CookbookError, Result};

// Re-export commonly used core types
pub use cookbook_core::{
    Entry, EntryDescriptor, EntryKind, EntryName, IngredientQuantity, QueryError, RegistryError,
    Resolution, ResolveError, Summary,
};
