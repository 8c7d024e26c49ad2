//! # Cookbook Testkit
//!
//! Testing utilities for the cookbook.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: ready-made entry sets and preloaded cookbooks
//! - **Generators**: Proptest strategies, including random acyclic cookbooks
//!   with an independently computed expected summary
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cookbook::core::Resolver;
//! use cookbook_testkit::{registry_from, CookbookParams};
//!
//! proptest! {
//!     #[test]
//!     fn every_recipe_resolves(params: CookbookParams) {
//!         let registry = registry_from(&params.descriptors());
//!         for j in 0..params.recipes.len() {
//!             prop_assert!(Resolver::new(&registry).resolve(&params.recipe_name(j)).is_ok());
//!         }
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use cookbook_testkit::fixtures::{breakfast_entries, registry_from};
//!
//! let registry = registry_from(&breakfast_entries());
//! assert!(registry.contains("Pancake"));
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{breakfast_entries, registry_from, TestFixture};
pub use generators::CookbookParams;
