//! Shopping-list types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::Ingredient;
use crate::util::name;

/// One planned meal: a recipe id with a repeat count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
  pub recipe_id: String,
  pub multiplier: u32,
}

impl PlanEntry {
  pub fn new(recipe_id: impl Into<String>, multiplier: u32) -> Self {
    Self {
      recipe_id: recipe_id.into(),
      multiplier,
    }
  }
}

/// A line on the derived shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
  pub name: String,
  pub amount: f64,
  pub unit: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

impl ShoppingItem {
  /// Convert this line into a tracked inventory ingredient for merging.
  pub fn to_inventory_item(&self) -> Ingredient {
    let mut item = Ingredient::new(self.name.clone(), self.amount, self.unit.clone());
    item.category = self.category.clone();
    item
  }
}

/// A category section of the grouped list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
  pub category: String,
  pub items: Vec<ShoppingItem>,
}

/// The grouped shopping list, category sections in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
  pub groups: Vec<CategoryGroup>,
}

impl ShoppingList {
  pub fn is_empty(&self) -> bool {
    self.groups.iter().all(|g| g.items.is_empty())
  }

  /// Total number of lines across all groups.
  pub fn item_count(&self) -> usize {
    self.groups.iter().map(|g| g.items.len()).sum()
  }

  /// Iterate all lines in display order.
  pub fn items(&self) -> impl Iterator<Item = &ShoppingItem> {
    self.groups.iter().flat_map(|g| g.items.iter())
  }

  /// Find a line by case-insensitive name.
  pub fn find(&self, item_name: &str) -> Option<&ShoppingItem> {
    self.items().find(|i| name::matches(&i.name, item_name))
  }
}

/// Ephemeral check-off state for a shopping session.
///
/// Keyed by normalized item name and bound to a fingerprint of the meal
/// plan; any change to the plan resets all checks. Never persisted.
#[derive(Debug, Default)]
pub struct Checklist {
  plan_key: String,
  checked: HashSet<String>,
}

impl Checklist {
  pub fn new() -> Self {
    Self::default()
  }

  /// Bind the checklist to a plan, clearing it when the plan changed.
  pub fn sync_plan(&mut self, plan: &[PlanEntry]) {
    let key = plan
      .iter()
      .map(|e| format!("{}x{}", e.recipe_id, e.multiplier))
      .collect::<Vec<_>>()
      .join(";");
    if key != self.plan_key {
      self.plan_key = key;
      self.checked.clear();
    }
  }

  /// Flip an item's checked state, returning the new state.
  pub fn toggle(&mut self, item_name: &str) -> bool {
    let key = name::normalize(item_name);
    if self.checked.remove(&key) {
      false
    } else {
      self.checked.insert(key);
      true
    }
  }

  pub fn is_checked(&self, item_name: &str) -> bool {
    self.checked.contains(&name::normalize(item_name))
  }

  pub fn checked_count(&self) -> usize {
    self.checked.len()
  }
}
