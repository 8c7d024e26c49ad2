//! # Cookbook Core
//!
//! Pure primitives for the cookbook: entries, registration rules, and recipe
//! resolution.
//!
//! This crate contains no I/O, no locking, no networking. It is pure
//! computation over an in-memory [`Registry`].
//!
//! ## Key Types
//!
//! - [`Entry`] - An ingredient or a recipe
//! - [`EntryName`] - Non-empty, case-sensitive registry key
//! - [`EntryDescriptor`] - Unvalidated registration request
//! - [`Registry`] - Insert-only name to entry mapping
//! - [`Resolver`] - Expands a recipe into cook time and ingredients
//!
//! ## Resolution
//!
//! ```rust
//! use cookbook_core::{EntryDescriptor, Registry, Resolver};
//!
//! let mut registry = Registry::new();
//! registry.insert(&EntryDescriptor::ingredient("Egg", 5)).unwrap();
//! registry.insert(&EntryDescriptor::ingredient("Flour", 2)).unwrap();
//! registry
//!     .insert(&EntryDescriptor::recipe("Pancake", [("Egg", 2), ("Flour", 3)]))
//!     .unwrap();
//!
//! let summary = Resolver::new(&registry).summarize("Pancake").unwrap();
//! assert_eq!(summary.cook_time, 16);
//! ```

pub mod entry;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod types;
pub mod validation;

pub use entry::{
    Entry, EntryDescriptor, EntryKind, Ingredient, Recipe, RequiredItem, RequiredItemDescriptor,
    INGREDIENT_TAG, RECIPE_TAG,
};
pub use error::{QueryError, RegistryError, ResolveError};
pub use registry::Registry;
pub use resolve::{
    resolve, summarize, IngredientQuantity, Resolution, Resolver, Summary, DEFAULT_MAX_DEPTH,
};
pub use types::EntryName;
pub use validation::{validate_entry, validate_required_items};
