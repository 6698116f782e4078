//! Aggregate state types.
//!
//! The persisted document is a single JSON object holding the entire
//! application state. Field names match the original document format
//! (camelCase), so a previously exported file reads back unchanged.
//!
//! # Structure
//!
//! ```json
//! {
//!   "recipes": [ { "id": "...", "name": "...", "ingredients": [...] } ],
//!   "inventory": [ { "id": "...", "name": "...", "amount": 50.0 } ],
//!   "customTags": [ "Breakfast", "Quick" ],
//!   "categories": [ "Produce", "Dairy", "Other" ]
//! }
//! ```
//!
//! # Defaulting
//!
//! Every field carries an independent serde default so a document written by
//! any version of the app (or hand-edited) loads without a migration step.
//! `customTags` and `categories` default to the seed vocabularies; entity
//! lists default to empty.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CATEGORIES, DEFAULT_TAGS};
use crate::util::id;

/// Qualitative stock level for inventory items.
///
/// Authoritative for items with `untracked_amount` set; advisory otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
  InStock,
  LowStock,
  OutOfStock,
}

impl StockStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      StockStatus::InStock => "in-stock",
      StockStatus::LowStock => "low-stock",
      StockStatus::OutOfStock => "out-of-stock",
    }
  }
}

impl std::fmt::Display for StockStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Error parsing a [`StockStatus`] from user input.
#[derive(Debug, thiserror::Error)]
#[error("unknown stock status '{0}' (expected in-stock, low-stock or out-of-stock)")]
pub struct ParseStockStatusError(String);

impl std::str::FromStr for StockStatus {
  type Err = ParseStockStatusError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "in-stock" => Ok(StockStatus::InStock),
      "low-stock" => Ok(StockStatus::LowStock),
      "out-of-stock" => Ok(StockStatus::OutOfStock),
      other => Err(ParseStockStatusError(other.to_string())),
    }
  }
}

/// A pantry item, or the requirement half of a [`RecipeIngredient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub amount: f64,
  #[serde(default)]
  pub unit: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  /// When set, `amount`/`unit` are not authoritative for stock decisions;
  /// `stock_status` governs.
  #[serde(default)]
  pub untracked_amount: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stock_status: Option<StockStatus>,
}

impl Ingredient {
  /// Create a tracked ingredient with a fresh identity.
  pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
    Self {
      id: id::new_id(),
      name: name.into(),
      amount,
      unit: unit.into(),
      category: None,
      untracked_amount: false,
      stock_status: None,
    }
  }
}

/// A recipe requirement: an ingredient plus whether it may be skipped.
///
/// Optional ingredients are excluded from cookability and shortfall checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
  #[serde(flatten)]
  pub item: Ingredient,
  #[serde(default)]
  pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub ingredients: Vec<RecipeIngredient>,
  #[serde(default)]
  pub instructions: String,
  /// Tags from the global vocabulary; membership is not enforced.
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub prep_time_minutes: Option<u32>,
}

impl Recipe {
  /// Create an empty recipe with a fresh identity.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      id: id::new_id(),
      name: name.into(),
      description: String::new(),
      ingredients: Vec::new(),
      instructions: String::new(),
      tags: Vec::new(),
      prep_time_minutes: None,
    }
  }
}

/// The aggregate root: everything the application persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
  #[serde(default)]
  pub recipes: Vec<Recipe>,
  #[serde(default)]
  pub inventory: Vec<Ingredient>,
  #[serde(default = "default_tags")]
  pub custom_tags: Vec<String>,
  #[serde(default = "default_categories")]
  pub categories: Vec<String>,
}

impl Default for AppState {
  fn default() -> Self {
    Self {
      recipes: Vec::new(),
      inventory: Vec::new(),
      custom_tags: default_tags(),
      categories: default_categories(),
    }
  }
}

/// The seed tag vocabulary.
pub fn default_tags() -> Vec<String> {
  DEFAULT_TAGS.iter().map(|s| s.to_string()).collect()
}

/// The seed category vocabulary.
pub fn default_categories() -> Vec<String> {
  DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_state_carries_seed_vocabularies() {
    let state = AppState::default();
    assert!(state.recipes.is_empty());
    assert!(state.inventory.is_empty());
    assert_eq!(state.custom_tags.len(), 8);
    assert_eq!(state.categories.len(), 9);
    assert!(state.custom_tags.contains(&"Breakfast".to_string()));
    assert!(state.categories.contains(&"Other".to_string()));
  }

  #[test]
  fn stock_status_uses_kebab_case_on_the_wire() {
    let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
    assert_eq!(json, r#""out-of-stock""#);

    let parsed: StockStatus = serde_json::from_str(r#""low-stock""#).unwrap();
    assert_eq!(parsed, StockStatus::LowStock);
  }

  #[test]
  fn stock_status_from_str() {
    assert_eq!("in-stock".parse::<StockStatus>().unwrap(), StockStatus::InStock);
    assert_eq!(" Out-Of-Stock ".parse::<StockStatus>().unwrap(), StockStatus::OutOfStock);
    assert!("plenty".parse::<StockStatus>().is_err());
  }

  #[test]
  fn ingredient_serializes_camel_case() {
    let mut item = Ingredient::new("Milk", 500.0, "ml");
    item.untracked_amount = true;
    item.stock_status = Some(StockStatus::InStock);

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["untrackedAmount"], true);
    assert_eq!(value["stockStatus"], "in-stock");
    assert!(value.get("category").is_none());
  }

  #[test]
  fn ingredient_optional_fields_default_when_absent() {
    let json = r#"{ "id": "x", "name": "Salt" }"#;
    let item: Ingredient = serde_json::from_str(json).unwrap();
    assert_eq!(item.amount, 0.0);
    assert_eq!(item.unit, "");
    assert!(item.category.is_none());
    assert!(!item.untracked_amount);
    assert!(item.stock_status.is_none());
  }

  #[test]
  fn recipe_ingredient_flattens_into_one_object() {
    let ri = RecipeIngredient {
      item: Ingredient::new("Flour", 200.0, "g"),
      optional: true,
    };
    let value = serde_json::to_value(&ri).unwrap();
    assert_eq!(value["name"], "Flour");
    assert_eq!(value["optional"], true);

    let back: RecipeIngredient = serde_json::from_value(value).unwrap();
    assert_eq!(back, ri);
  }

  #[test]
  fn recipe_ingredient_optional_defaults_to_false() {
    let json = r#"{ "id": "x", "name": "Basil", "amount": 5, "unit": "leaves" }"#;
    let ri: RecipeIngredient = serde_json::from_str(json).unwrap();
    assert!(!ri.optional);
  }

  #[test]
  fn app_state_fields_default_independently() {
    let json = r#"{ "recipes": [] }"#;
    let state: AppState = serde_json::from_str(json).unwrap();
    assert!(state.recipes.is_empty());
    assert!(state.inventory.is_empty());
    assert_eq!(state.custom_tags, default_tags());
    assert_eq!(state.categories, default_categories());
  }

  #[test]
  fn app_state_round_trips() {
    let mut state = AppState::default();
    let mut recipe = Recipe::new("Pancakes");
    recipe.description = "Weekend breakfast".to_string();
    recipe.prep_time_minutes = Some(20);
    recipe.ingredients.push(RecipeIngredient {
      item: Ingredient::new("Flour", 200.0, "g"),
      optional: false,
    });
    state.recipes.push(recipe);
    state.inventory.push(Ingredient::new("Milk", 1000.0, "ml"));

    let json = serde_json::to_string_pretty(&state).unwrap();
    let back: AppState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
  }

  #[test]
  fn fresh_entities_get_distinct_ids() {
    assert_ne!(Recipe::new("a").id, Recipe::new("a").id);
    assert_ne!(Ingredient::new("a", 1.0, "x").id, Ingredient::new("a", 1.0, "x").id);
  }
}
