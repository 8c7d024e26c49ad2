//! Proptest generators for property-based testing.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use proptest::sample::Index;

use cookbook::EntryDescriptor;

/// Maximum number of items a generated recipe lists.
const MAX_ITEMS: usize = 4;

/// Generate an entry name.
pub fn entry_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,11}( [A-Z][a-z]{0,11})?".prop_map(String::from)
}

/// Generate a valid cook time.
pub fn cook_time() -> impl Strategy<Value = i64> {
    0i64..=100
}

/// Generate a negative cook time.
pub fn negative_cook_time() -> impl Strategy<Value = i64> {
    i64::MIN..0
}

/// Generate a valid quantity.
pub fn quantity() -> impl Strategy<Value = i64> {
    1i64..10
}

/// Generate a zero or negative quantity.
pub fn non_positive_quantity() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), i64::MIN..0]
}

/// An acyclic cookbook.
///
/// Ingredient `i` is named `I{i}` and recipe `j` is named `R{j}`. Recipe `j`
/// only refers to ingredients and to recipes with a smaller index, so every
/// recipe resolves.
#[derive(Debug, Clone)]
pub struct CookbookParams {
    /// Cook time of each ingredient.
    pub ingredients: Vec<i64>,
    /// Items of each recipe as `(node index, quantity)`. Node indices below
    /// `ingredients.len()` are ingredients; the rest are recipes.
    pub recipes: Vec<Vec<(usize, i64)>>,
}

impl CookbookParams {
    fn node_name(&self, node: usize) -> String {
        match node.checked_sub(self.ingredients.len()) {
            None => format!("I{}", node),
            Some(recipe) => format!("R{}", recipe),
        }
    }

    pub fn recipe_name(&self, recipe: usize) -> String {
        format!("R{}", recipe)
    }

    pub fn ingredient_descriptors(&self) -> Vec<EntryDescriptor> {
        self.ingredients
            .iter()
            .enumerate()
            .map(|(i, &cook_time)| EntryDescriptor::ingredient(self.node_name(i), cook_time))
            .collect()
    }

    pub fn recipe_descriptors(&self) -> Vec<EntryDescriptor> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(j, items)| {
                EntryDescriptor::recipe(
                    self.recipe_name(j),
                    items.iter().map(|&(node, q)| (self.node_name(node), q)),
                )
            })
            .collect()
    }

    /// Ingredients first, then recipes in dependency order.
    pub fn descriptors(&self) -> Vec<EntryDescriptor> {
        let mut all = self.ingredient_descriptors();
        all.extend(self.recipe_descriptors());
        all
    }

    /// Expected `(cook time, ingredient tally)` of recipe `j`, computed
    /// without the resolver.
    pub fn expected(&self, recipe: usize) -> (u64, HashMap<String, u64>) {
        let mut time = 0u64;
        let mut tally: HashMap<String, u64> = HashMap::new();

        for &(node, q) in &self.recipes[recipe] {
            let q = q as u64;
            if node < self.ingredients.len() {
                let t = self.ingredients[node] as u64;
                time += q * t;
                *tally.entry(self.node_name(node)).or_default() += q * t;
            } else {
                let (sub_time, sub_tally) = self.expected(node - self.ingredients.len());
                time += q * sub_time;
                for (name, amount) in sub_tally {
                    *tally.entry(name).or_default() += q * amount;
                }
            }
        }
        (time, tally)
    }
}

impl Arbitrary for CookbookParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let raw_items = prop::collection::vec((any::<Index>(), quantity()), 0..=MAX_ITEMS);
        (
            prop::collection::vec(cook_time(), 1..=5),
            prop::collection::vec(raw_items, 1..=5),
        )
            .prop_map(|(ingredients, raw_recipes)| {
                let n_ingredients = ingredients.len();
                let recipes = raw_recipes
                    .into_iter()
                    .enumerate()
                    .map(|(j, raw)| recipe_items(n_ingredients + j, raw))
                    .collect();
                CookbookParams {
                    ingredients,
                    recipes,
                }
            })
            .boxed()
    }
}

/// Map sampled indices onto the first `pool` nodes, keeping the first
/// occurrence of each node.
fn recipe_items(pool: usize, raw: Vec<(Index, i64)>) -> Vec<(usize, i64)> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|(index, q)| (index.index(pool), q))
        .filter(|&(node, _)| seen.insert(node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook::core::{Registry, Resolver};
    use cookbook::{QueryError, RegistryError, ResolveError};

    use crate::fixtures::registry_from;

    fn tally(registry: &Registry, name: &str) -> (u64, HashMap<String, u64>) {
        let resolution = Resolver::new(registry).resolve(name).unwrap();
        let tally = resolution
            .ingredients
            .into_iter()
            .map(|(name, amount)| (name.into_string(), amount))
            .collect();
        (resolution.cook_time, tally)
    }

    proptest! {
        #[test]
        fn test_resolution_matches_model(params: CookbookParams) {
            let registry = registry_from(&params.descriptors());

            for j in 0..params.recipes.len() {
                prop_assert_eq!(tally(&registry, &params.recipe_name(j)), params.expected(j));
            }
        }

        #[test]
        fn test_registration_order_irrelevant(params: CookbookParams) {
            let in_order = registry_from(&params.descriptors());

            // Recipes first, newest first: every reference is a forward one.
            let mut reversed = params.recipe_descriptors();
            reversed.reverse();
            reversed.extend(params.ingredient_descriptors());
            let out_of_order = registry_from(&reversed);

            for j in 0..params.recipes.len() {
                let name = params.recipe_name(j);
                prop_assert_eq!(
                    Resolver::new(&in_order).summarize(&name),
                    Resolver::new(&out_of_order).summarize(&name)
                );
            }
        }

        #[test]
        fn test_summary_is_deterministic(params: CookbookParams) {
            let registry = registry_from(&params.descriptors());
            let name = params.recipe_name(params.recipes.len() - 1);
            let a = Resolver::new(&registry).summarize(&name).unwrap();
            let b = Resolver::new(&registry).summarize(&name).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_missing_leaf_fails_every_dependent(params: CookbookParams) {
            // Drop ingredient I0: exactly the recipes that reach it fail.
            let descriptors: Vec<_> = params.descriptors().into_iter().skip(1).collect();
            let registry = registry_from(&descriptors);

            for j in 0..params.recipes.len() {
                let (_, expected) = params.expected(j);
                let result = Resolver::new(&registry).summarize(&params.recipe_name(j));
                if expected.contains_key("I0") {
                    prop_assert_eq!(
                        result,
                        Err(QueryError::Resolve(ResolveError::UnresolvedReference("I0".into())))
                    );
                } else {
                    prop_assert!(result.is_ok());
                }
            }
        }

        #[test]
        fn test_duplicate_insert_leaves_registry_unchanged(
            params: CookbookParams,
            pick in any::<Index>(),
            cook in cook_time(),
        ) {
            let mut registry = registry_from(&params.descriptors());
            let names: Vec<String> = registry.names().iter().map(|n| n.to_string()).collect();
            let taken = pick.get(&names).clone();

            let before = registry.lookup(&taken).cloned();
            let result = registry.insert(&EntryDescriptor::ingredient(taken.clone(), cook));

            prop_assert!(matches!(result, Err(RegistryError::DuplicateName(_))));
            prop_assert_eq!(registry.lookup(&taken).cloned(), before);
            prop_assert_eq!(registry.len(), names.len());
        }

        #[test]
        fn test_non_positive_quantity_rejected(
            name in entry_name(),
            item in entry_name(),
            quantity in non_positive_quantity(),
        ) {
            let mut registry = Registry::new();
            let result = registry.insert(&EntryDescriptor::recipe(name, [(item, quantity)]));

            prop_assert!(
                matches!(result, Err(RegistryError::InvalidQuantity { quantity: q, .. }) if q == quantity),
                "unexpected result: {:?}",
                result
            );
            prop_assert!(registry.is_empty());
        }

        #[test]
        fn test_positive_quantity_accepted(
            name in entry_name(),
            item in entry_name(),
            quantity in 1i64..=i64::MAX,
        ) {
            let mut registry = Registry::new();
            prop_assert!(registry.insert(&EntryDescriptor::recipe(name.clone(), [(item, quantity)])).is_ok());
            prop_assert!(registry.contains(&name));
        }

        #[test]
        fn test_negative_cook_time_rejected(name in entry_name(), cook in negative_cook_time()) {
            let mut registry = Registry::new();
            let result = registry.insert(&EntryDescriptor::ingredient(name, cook));
            prop_assert!(
                matches!(result, Err(RegistryError::NegativeCookTime { .. })),
                "unexpected result: {:?}",
                result
            );
            prop_assert!(registry.is_empty());
        }

        #[test]
        fn test_ingredient_resolves_to_own_cook_time(name in entry_name(), cook in cook_time()) {
            let registry = registry_from(&[EntryDescriptor::ingredient(name.clone(), cook)]);
            let (time, tally) = tally(&registry, &name);
            prop_assert_eq!(time, cook as u64);
            prop_assert_eq!(tally, HashMap::from([(name, cook as u64)]));
        }
    }
}
