//! Recipe catalog rules.
//!
//! Recipes are owned by the aggregate and addressed by id; nothing else
//! references a recipe, so removal needs no orphan cleanup. The cookability
//! check joins recipe requirements against the inventory by normalized name.

use crate::model::{Ingredient, Recipe, StockStatus};
use crate::util::name;

/// Error returned when a recipe cannot be resolved.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no recipe matching '{0}'")]
pub struct RecipeNotFound(pub String);

/// Look up a recipe by exact id or case-insensitive name.
pub fn find<'a>(recipes: &'a [Recipe], key: &str) -> Option<&'a Recipe> {
  recipes
    .iter()
    .find(|r| r.id == key)
    .or_else(|| recipes.iter().find(|r| name::matches(&r.name, key)))
}

/// Add a recipe to the catalog, returning its id.
///
/// The recipe carries its identity from construction; duplicated names are
/// allowed.
pub fn add(recipes: &mut Vec<Recipe>, recipe: Recipe) -> String {
  let recipe_id = recipe.id.clone();
  recipes.push(recipe);
  recipe_id
}

/// Replace a recipe by identity.
pub fn update(recipes: &mut [Recipe], recipe: Recipe) -> Result<(), RecipeNotFound> {
  match recipes.iter_mut().find(|r| r.id == recipe.id) {
    Some(existing) => {
      *existing = recipe;
      Ok(())
    }
    None => Err(RecipeNotFound(recipe.id)),
  }
}

/// Remove a recipe by id or name, returning it.
pub fn remove(recipes: &mut Vec<Recipe>, key: &str) -> Result<Recipe, RecipeNotFound> {
  let idx = recipes
    .iter()
    .position(|r| r.id == key)
    .or_else(|| recipes.iter().position(|r| name::matches(&r.name, key)))
    .ok_or_else(|| RecipeNotFound(key.to_string()))?;
  Ok(recipes.remove(idx))
}

/// Names of non-optional ingredients not sufficiently present in inventory.
///
/// An untracked inventory item that is not out-of-stock satisfies any
/// required amount; otherwise the tracked amount must cover the requirement.
/// No inventory match at all counts as missing.
pub fn missing_ingredients(recipe: &Recipe, inventory: &[Ingredient]) -> Vec<String> {
  recipe
    .ingredients
    .iter()
    .filter(|ri| !ri.optional)
    .filter(|ri| !in_stock_for(&ri.item, inventory))
    .map(|ri| ri.item.name.clone())
    .collect()
}

/// Whether every non-optional ingredient is covered by the inventory.
pub fn is_cookable(recipe: &Recipe, inventory: &[Ingredient]) -> bool {
  missing_ingredients(recipe, inventory).is_empty()
}

fn in_stock_for(required: &Ingredient, inventory: &[Ingredient]) -> bool {
  match inventory.iter().find(|i| name::matches(&i.name, &required.name)) {
    Some(stock) if stock.untracked_amount => stock.stock_status != Some(StockStatus::OutOfStock),
    Some(stock) => stock.amount >= required.amount,
    None => false,
  }
}
