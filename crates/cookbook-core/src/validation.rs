//! Entry validation: shape and uniqueness checks run before registration.

use std::collections::HashSet;

use crate::entry::{
    Entry, EntryDescriptor, EntryKind, Ingredient, Recipe, RequiredItem, RequiredItemDescriptor,
};
use crate::error::RegistryError;
use crate::types::EntryName;

/// Validate a descriptor against the registry's current names.
///
/// `is_taken` reports whether a name is already registered. Checks run in a
/// fixed order and the first failure wins:
///
/// 1. The name is not already taken.
/// 2. The type tag is `recipe` or `ingredient`.
/// 3. Recipes: item names are unique and quantities positive. Items are not
///    checked for existence.
/// 4. Ingredients: the cook time is not negative.
///
/// An empty name is rejected up front; it can never be taken.
pub fn validate_entry<F>(
    descriptor: &EntryDescriptor,
    is_taken: F,
) -> Result<(EntryName, Entry), RegistryError>
where
    F: Fn(&str) -> bool,
{
    let name = EntryName::new(descriptor.name.as_str())?;

    // 1. Name uniqueness
    if is_taken(name.as_str()) {
        return Err(RegistryError::DuplicateName(name));
    }

    // 2. Type tag
    let kind = EntryKind::from_tag(&descriptor.kind)
        .ok_or_else(|| RegistryError::InvalidType(descriptor.kind.clone()))?;

    let entry = match kind {
        // 3. Recipe items
        EntryKind::Recipe => {
            let items = descriptor
                .required_items
                .as_deref()
                .ok_or_else(|| RegistryError::MissingField {
                    name: name.clone(),
                    kind,
                    field: "requiredItems",
                })?;
            Entry::Recipe(validate_required_items(&name, items)?)
        }
        // 4. Ingredient cook time
        EntryKind::Ingredient => {
            let cook_time = descriptor
                .cook_time
                .ok_or_else(|| RegistryError::MissingField {
                    name: name.clone(),
                    kind,
                    field: "cookTime",
                })?;
            let cook_time = u64::try_from(cook_time)
                .map_err(|_| RegistryError::NegativeCookTime {
                    name: name.clone(),
                    cook_time,
                })?;
            Entry::Ingredient(Ingredient { cook_time })
        }
    };

    Ok((name, entry))
}

/// Validate a recipe's item list, preserving its order.
pub fn validate_required_items(
    recipe: &EntryName,
    items: &[RequiredItemDescriptor],
) -> Result<Recipe, RegistryError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    let mut required = Vec::with_capacity(items.len());

    for item in items {
        let name = EntryName::new(item.name.as_str())?;

        if !seen.insert(item.name.as_str()) {
            return Err(RegistryError::DuplicateRequiredItem {
                recipe: recipe.clone(),
                item: name,
            });
        }

        let quantity = u64::try_from(item.quantity)
            .ok()
            .filter(|&q| q > 0)
            .ok_or_else(|| RegistryError::InvalidQuantity {
                recipe: recipe.clone(),
                item: name.clone(),
                quantity: item.quantity,
            })?;

        required.push(RequiredItem { name, quantity });
    }

    Ok(Recipe::new(required))
}
