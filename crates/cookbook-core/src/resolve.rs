//! Recipe resolution: expanding an entry into its total cook time and the
//! flattened multiset of ingredients it needs.
//!
//! Resolution is a depth-first walk over the name graph. Sub-results are
//! combined by return value; the only mutable state is the stack of recipe
//! names on the active path, used to reject cycles. Nothing is cached, so an
//! entry referenced twice is resolved twice.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, Recipe};
use crate::error::{QueryError, ResolveError};
use crate::registry::Registry;
use crate::types::EntryName;

/// Default limit on nested recipes along a single path.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The expansion of one unit of an entry.
///
/// For a leaf ingredient the tallied amount is its cook time, not a unit
/// count, and recipes scale those amounts by their quantities. Ingredient
/// order is first occurrence in the depth-first walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub cook_time: u64,
    pub ingredients: IndexMap<EntryName, u64>,
}

impl Resolution {
    fn leaf(name: &EntryName, cook_time: u64) -> Self {
        let mut ingredients = IndexMap::with_capacity(1);
        ingredients.insert(name.clone(), cook_time);
        Self {
            cook_time,
            ingredients,
        }
    }

    /// Add `quantity` units of `sub`. Returns `None` on overflow.
    fn absorb(&mut self, sub: &Resolution, quantity: u64) -> Option<()> {
        let time = sub.cook_time.checked_mul(quantity)?;
        self.cook_time = self.cook_time.checked_add(time)?;

        for (name, &amount) in &sub.ingredients {
            let scaled = amount.checked_mul(quantity)?;
            let total = self.ingredients.entry(name.clone()).or_insert(0);
            *total = total.checked_add(scaled)?;
        }
        Some(())
    }

    /// Present this resolution as the summary of `name`.
    pub fn into_summary(self, name: EntryName) -> Summary {
        Summary {
            name,
            cook_time: self.cook_time,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity { name, quantity })
                .collect(),
        }
    }
}

/// The answer to a top-level summary query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: EntryName,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientQuantity>,
}

/// One line of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: EntryName,
    pub quantity: u64,
}

/// Resolves entries against a registry snapshot. Never mutates the registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
    max_depth: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit the number of recipes nested along one path.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expand `name` into its cook time and ingredients.
    ///
    /// Fails if any transitively required name is missing, if a recipe
    /// requires itself, or if the totals overflow.
    pub fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        let mut path = Vec::new();
        self.resolve_on_path(name, &mut path)
    }

    /// Answer a top-level summary query.
    ///
    /// Only recipes are valid targets; an ingredient is rejected before any
    /// resolution happens.
    pub fn summarize(&self, name: &str) -> Result<Summary, QueryError> {
        let (key, entry) = self
            .registry
            .get_key_value(name)
            .ok_or_else(|| QueryError::NotFound(name.to_string()))?;

        if entry.is_ingredient() {
            return Err(QueryError::InvalidQueryTarget(key.clone()));
        }

        let resolution = self.resolve(name)?;
        Ok(resolution.into_summary(key.clone()))
    }

    fn resolve_on_path(
        &self,
        name: &str,
        path: &mut Vec<EntryName>,
    ) -> Result<Resolution, ResolveError> {
        let (key, entry) = self
            .registry
            .get_key_value(name)
            .ok_or_else(|| ResolveError::UnresolvedReference(name.to_string()))?;

        let recipe = match entry {
            Entry::Ingredient(ingredient) => return Ok(Resolution::leaf(key, ingredient.cook_time)),
            Entry::Recipe(recipe) => recipe,
        };

        if let Some(start) = path.iter().position(|on_path| on_path == key) {
            let mut cycle = path[start..].to_vec();
            cycle.push(key.clone());
            return Err(ResolveError::CyclicReference(cycle));
        }
        if path.len() >= self.max_depth {
            return Err(ResolveError::DepthExceeded(self.max_depth));
        }

        path.push(key.clone());
        let result = self.resolve_recipe(key, recipe, path);
        path.pop();
        result
    }

    fn resolve_recipe(
        &self,
        key: &EntryName,
        recipe: &Recipe,
        path: &mut Vec<EntryName>,
    ) -> Result<Resolution, ResolveError> {
        let mut total = Resolution::default();
        for item in recipe.required_items() {
            let sub = self.resolve_on_path(item.name.as_str(), path)?;
            total
                .absorb(&sub, item.quantity)
                .ok_or_else(|| ResolveError::Overflow(key.clone()))?;
        }
        Ok(total)
    }
}

/// Resolve `name` with default limits.
pub fn resolve(registry: &Registry, name: &str) -> Result<Resolution, ResolveError> {
    Resolver::new(registry).resolve(name)
}

/// Summarize `name` with default limits.
pub fn summarize(registry: &Registry, name: &str) -> Result<Summary, QueryError> {
    Resolver::new(registry).summarize(name)
}
