//! Entries: the ingredients and recipes stored in a cookbook.
//!
//! An [`Entry`] is immutable once registered. Callers describe what they want
//! to register with an [`EntryDescriptor`], which is checked by
//! [`validate_entry`](crate::validation::validate_entry) before anything is
//! stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::EntryName;

/// Type tag of a recipe descriptor.
pub const RECIPE_TAG: &str = "recipe";

/// Type tag of an ingredient descriptor.
pub const INGREDIENT_TAG: &str = "ingredient";

/// Discriminator between the two entry shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Recipe,
    Ingredient,
}

impl EntryKind {
    /// The wire tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Recipe => RECIPE_TAG,
            EntryKind::Ingredient => INGREDIENT_TAG,
        }
    }

    /// Parse a type tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            RECIPE_TAG => Some(EntryKind::Recipe),
            INGREDIENT_TAG => Some(EntryKind::Ingredient),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic ingredient with a fixed cook time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub cook_time: u64,
}

/// A reference from a recipe to another entry, with a multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: EntryName,
    pub quantity: u64,
}

/// A composite entry built from other entries.
///
/// Item names are unique within a recipe and quantities are positive. They
/// are not required to exist in the registry, so a recipe may refer to
/// entries registered later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    required_items: Vec<RequiredItem>,
}

impl Recipe {
    /// Only validation builds recipes, so the item invariants always hold.
    pub(crate) fn new(required_items: Vec<RequiredItem>) -> Self {
        Self { required_items }
    }

    /// The required items, in registration order.
    pub fn required_items(&self) -> &[RequiredItem] {
        &self.required_items
    }

    /// Quantity required of `name`, if the recipe lists it.
    pub fn quantity_of(&self, name: &str) -> Option<u64> {
        self.required_items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.quantity)
    }
}

/// A registered cookbook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Recipe(Recipe),
    Ingredient(Ingredient),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Recipe(_) => EntryKind::Recipe,
            Entry::Ingredient(_) => EntryKind::Ingredient,
        }
    }

    pub fn is_ingredient(&self) -> bool {
        matches!(self, Entry::Ingredient(_))
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Entry::Recipe(recipe) => Some(recipe),
            Entry::Ingredient(_) => None,
        }
    }

    pub fn as_ingredient(&self) -> Option<&Ingredient> {
        match self {
            Entry::Ingredient(ingredient) => Some(ingredient),
            Entry::Recipe(_) => None,
        }
    }
}

/// An unvalidated registration request.
///
/// Mirrors the create-entry JSON body: `type` is kept as a raw string so that
/// unknown tags surface as a registry error rather than a decoding error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_items: Option<Vec<RequiredItemDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<i64>,
}

/// An unvalidated required item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItemDescriptor {
    pub name: String,
    pub quantity: i64,
}

impl EntryDescriptor {
    /// Describe an ingredient.
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            kind: INGREDIENT_TAG.to_string(),
            name: name.into(),
            required_items: None,
            cook_time: Some(cook_time),
        }
    }

    /// Describe a recipe from `(item name, quantity)` pairs.
    pub fn recipe<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            kind: RECIPE_TAG.to_string(),
            name: name.into(),
            required_items: Some(
                items
                    .into_iter()
                    .map(|(name, quantity)| RequiredItemDescriptor {
                        name: name.into(),
                        quantity,
                    })
                    .collect(),
            ),
            cook_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_are_exact() {
        assert_eq!(EntryKind::from_tag("recipe"), Some(EntryKind::Recipe));
        assert_eq!(EntryKind::from_tag("ingredient"), Some(EntryKind::Ingredient));
        assert_eq!(EntryKind::from_tag("Recipe"), None);
        assert_eq!(EntryKind::from_tag(""), None);
    }

    #[test]
    fn test_descriptor_from_json() {
        let json = r#"{
            "type": "recipe",
            "name": "Skibidi",
            "requiredItems": [{ "name": "Bruh", "quantity": 1 }]
        }"#;
        let descriptor: EntryDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor, EntryDescriptor::recipe("Skibidi", [("Bruh", 1)]));

        let json = r#"{ "type": "ingredient", "name": "Egg", "cookTime": 6 }"#;
        let descriptor: EntryDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor, EntryDescriptor::ingredient("Egg", 6));
    }

    #[test]
    fn test_descriptor_keeps_unknown_type() {
        let json = r#"{ "type": "pizza", "name": "Margherita" }"#;
        let descriptor: EntryDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.kind, "pizza");
        assert!(descriptor.cook_time.is_none());
        assert!(descriptor.required_items.is_none());
    }

    #[test]
    fn test_recipe_quantity_of() {
        let recipe = Recipe::new(vec![RequiredItem {
            name: EntryName::new("Egg").unwrap(),
            quantity: 2,
        }]);
        assert_eq!(recipe.quantity_of("Egg"), Some(2));
        assert_eq!(recipe.quantity_of("Flour"), None);
    }
}
