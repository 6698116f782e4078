//! Shopping-list computation.
//!
//! # Pipeline
//!
//! 1. Aggregate ingredient demand over the meal plan, keyed by normalized
//!    name. Unit and category come from the first occurrence of a name; no
//!    unit conversion is attempted.
//! 2. Net demand against the inventory. An untracked item that is not
//!    out-of-stock fully satisfies its line regardless of numbers.
//! 3. Inject replenishment lines: out-of-stock items unconditionally,
//!    low-stock items only when flagged.
//! 4. Group lines by category in vocabulary order; unresolvable categories
//!    land in the fallback group.

use std::collections::HashSet;

use crate::consts::FALLBACK_CATEGORY;
use crate::model::{Ingredient, Recipe, StockStatus};
use crate::util::name;

use super::types::{CategoryGroup, PlanEntry, ShoppingItem, ShoppingList};

/// Derive the full shopping list for a meal plan.
///
/// `replenish` holds ids of low-stock inventory items the user opted to
/// restock; out-of-stock items are always restocked.
pub fn build_shopping_list(
  plan: &[PlanEntry],
  recipes: &[Recipe],
  inventory: &[Ingredient],
  replenish: &HashSet<String>,
  categories: &[String],
) -> ShoppingList {
  let demand = aggregate_demand(plan, recipes);
  let mut items = net_against_inventory(demand, inventory);
  inject_replenishments(&mut items, inventory, replenish);
  group_by_category(items, categories)
}

/// Total ingredient demand across the plan, in first-demand order.
///
/// Accumulates `amount x multiplier` per normalized ingredient name. Plan
/// entries with multiplier 0 and unknown recipe ids contribute nothing, and
/// optional ingredients never create demand.
pub fn aggregate_demand(plan: &[PlanEntry], recipes: &[Recipe]) -> Vec<ShoppingItem> {
  let mut demand: Vec<ShoppingItem> = Vec::new();

  for entry in plan.iter().filter(|e| e.multiplier > 0) {
    let Some(recipe) = recipes.iter().find(|r| r.id == entry.recipe_id) else {
      continue;
    };
    for required in recipe.ingredients.iter().filter(|ri| !ri.optional) {
      let needed = required.item.amount * f64::from(entry.multiplier);
      match demand.iter_mut().find(|d| name::matches(&d.name, &required.item.name)) {
        Some(existing) => existing.amount += needed,
        None => demand.push(ShoppingItem {
          name: required.item.name.clone(),
          amount: needed,
          unit: required.item.unit.clone(),
          category: required.item.category.clone(),
        }),
      }
    }
  }

  demand
}

/// Subtract on-hand stock from demand, dropping satisfied lines.
fn net_against_inventory(demand: Vec<ShoppingItem>, inventory: &[Ingredient]) -> Vec<ShoppingItem> {
  demand
    .into_iter()
    .filter_map(|mut line| {
      if let Some(stock) = inventory.iter().find(|i| name::matches(&i.name, &line.name)) {
        if stock.untracked_amount {
          // Qualitative "I have some" beats any numeric demand.
          if stock.stock_status != Some(StockStatus::OutOfStock) {
            return None;
          }
        } else {
          line.amount = (line.amount - stock.amount).max(0.0);
        }
      }
      (line.amount > 0.0).then_some(line)
    })
    .collect()
}

/// Append restock lines for depleted pantry items not already on the list.
///
/// Out-of-stock items are restocked unconditionally; low-stock items only
/// when their id is in `replenish`. Injected lines use quantity 1 with the
/// item's own unit and category.
fn inject_replenishments(items: &mut Vec<ShoppingItem>, inventory: &[Ingredient], replenish: &HashSet<String>) {
  for stock in inventory {
    let wanted = match stock.stock_status {
      Some(StockStatus::OutOfStock) => true,
      Some(StockStatus::LowStock) => replenish.contains(&stock.id),
      _ => false,
    };
    if !wanted {
      continue;
    }
    if items.iter().any(|i| name::matches(&i.name, &stock.name)) {
      continue;
    }
    items.push(ShoppingItem {
      name: stock.name.clone(),
      amount: 1.0,
      unit: stock.unit.clone(),
      category: stock.category.clone(),
    });
  }
}

/// Group lines by category, in vocabulary order; empty groups are dropped.
fn group_by_category(items: Vec<ShoppingItem>, categories: &[String]) -> ShoppingList {
  let mut order: Vec<String> = categories.to_vec();
  if !order.iter().any(|c| name::matches(c, FALLBACK_CATEGORY)) {
    order.push(FALLBACK_CATEGORY.to_string());
  }

  let mut groups: Vec<CategoryGroup> = order
    .into_iter()
    .map(|category| CategoryGroup {
      category,
      items: Vec::new(),
    })
    .collect();
  let fallback_idx = groups
    .iter()
    .position(|g| name::matches(&g.category, FALLBACK_CATEGORY))
    .unwrap_or(groups.len() - 1);

  for item in items {
    let idx = item
      .category
      .as_deref()
      .and_then(|c| groups.iter().position(|g| name::matches(&g.category, c)))
      .unwrap_or(fallback_idx);
    groups[idx].items.push(item);
  }

  groups.retain(|g| !g.items.is_empty());
  ShoppingList { groups }
}

/// Record a purchased line in the pantry.
///
/// Tracked entries accumulate the purchased amount through the usual
/// inventory merge; untracked entries are simply marked in-stock; unknown
/// names become new tracked entries. Returns the id of the affected entry.
pub fn add_to_inventory(inventory: &mut Vec<Ingredient>, line: &ShoppingItem) -> String {
  if let Some(existing) = inventory.iter_mut().find(|i| name::matches(&i.name, &line.name)) {
    if existing.untracked_amount {
      existing.stock_status = Some(StockStatus::InStock);
      return existing.id.clone();
    }
  }
  crate::inventory::add_or_merge(inventory, line.to_inventory_item())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::RecipeIngredient;

  fn recipe_with(name: &str, ingredients: Vec<(&str, f64, &str, Option<&str>, bool)>) -> Recipe {
    let mut recipe = Recipe::new(name);
    for (ingredient_name, amount, unit, category, optional) in ingredients {
      let mut item = Ingredient::new(ingredient_name, amount, unit);
      item.category = category.map(str::to_string);
      recipe.ingredients.push(RecipeIngredient { item, optional });
    }
    recipe
  }

  fn untracked(name: &str, status: StockStatus) -> Ingredient {
    let mut item = Ingredient::new(name, 0.0, "");
    item.untracked_amount = true;
    item.stock_status = Some(status);
    item
  }

  fn categories() -> Vec<String> {
    crate::model::default_categories()
  }

  fn no_replenish() -> HashSet<String> {
    HashSet::new()
  }

  #[test]
  fn margherita_times_two_nets_against_stock() {
    // Plan: Margherita Pizza x2; recipe needs 100ml tomato sauce; pantry
    // holds 50ml tracked. Expect one line for 150ml (= 200 - 50).
    let recipe = recipe_with(
      "Margherita Pizza",
      vec![("Tomato sauce", 100.0, "ml", Some("Pantry"), false)],
    );
    let inventory = vec![Ingredient::new("tomato sauce", 50.0, "ml")];
    let plan = vec![PlanEntry::new(recipe.id.clone(), 2)];

    let list = build_shopping_list(&plan, &[recipe], &inventory, &no_replenish(), &categories());

    assert_eq!(list.item_count(), 1);
    let line = list.find("Tomato sauce").unwrap();
    assert_eq!(line.amount, 150.0);
    assert_eq!(line.unit, "ml");
  }

  #[test]
  fn fully_covered_demand_is_excluded() {
    let recipe = recipe_with("Omelette", vec![("Eggs", 3.0, "pcs", Some("Dairy"), false)]);
    let inventory = vec![Ingredient::new("Eggs", 12.0, "pcs")];
    let plan = vec![PlanEntry::new(recipe.id.clone(), 2)];

    let list = build_shopping_list(&plan, &[recipe], &inventory, &no_replenish(), &categories());
    assert!(list.is_empty());
  }

  #[test]
  fn untracked_in_stock_overrides_any_demand() {
    // "I have some avocados" beats a demand for 3 of them.
    let recipe = recipe_with("Guacamole", vec![("Avocado", 3.0, "pcs", Some("Produce"), false)]);
    let inventory = vec![untracked("Avocado", StockStatus::InStock)];
    let plan = vec![PlanEntry::new(recipe.id.clone(), 1)];

    let list = build_shopping_list(&plan, &[recipe], &inventory, &no_replenish(), &categories());
    assert!(list.is_empty());
  }

  #[test]
  fn untracked_out_of_stock_keeps_full_demand() {
    let recipe = recipe_with("Guacamole", vec![("Avocado", 3.0, "pcs", Some("Produce"), false)]);
    let inventory = vec![untracked("Avocado", StockStatus::OutOfStock)];
    let plan = vec![PlanEntry::new(recipe.id.clone(), 1)];

    let list = build_shopping_list(&plan, &[recipe], &inventory, &no_replenish(), &categories());
    assert_eq!(list.find("Avocado").unwrap().amount, 3.0);
  }

  #[test]
  fn multiplier_zero_entries_are_pruned() {
    let recipe = recipe_with("Soup", vec![("Carrots", 2.0, "pcs", Some("Produce"), false)]);
    let plan = vec![PlanEntry::new(recipe.id.clone(), 0)];

    let demand = aggregate_demand(&plan, &[recipe]);
    assert!(demand.is_empty());
  }

  #[test]
  fn unknown_recipe_ids_contribute_nothing() {
    let plan = vec![PlanEntry::new("no-such-recipe", 2)];
    assert!(aggregate_demand(&plan, &[]).is_empty());
  }

  #[test]
  fn optional_ingredients_create_no_demand() {
    let recipe = recipe_with(
      "Pasta",
      vec![
        ("Spaghetti", 200.0, "g", Some("Pantry"), false),
        ("Parmesan", 30.0, "g", Some("Dairy"), true),
      ],
    );
    let plan = vec![PlanEntry::new(recipe.id.clone(), 1)];

    let demand = aggregate_demand(&plan, &[recipe]);
    assert_eq!(demand.len(), 1);
    assert_eq!(demand[0].name, "Spaghetti");
  }

  #[test]
  fn demand_accumulates_across_recipes_case_insensitively() {
    let pizza = recipe_with("Pizza", vec![("Tomato Sauce", 100.0, "ml", Some("Pantry"), false)]);
    let pasta = recipe_with("Pasta", vec![("tomato sauce", 80.0, "ml", None, false)]);
    let plan = vec![PlanEntry::new(pizza.id.clone(), 1), PlanEntry::new(pasta.id.clone(), 2)];

    let demand = aggregate_demand(&plan, &[pizza, pasta]);
    assert_eq!(demand.len(), 1);
    assert_eq!(demand[0].amount, 260.0);
    // First occurrence wins for presentation fields.
    assert_eq!(demand[0].name, "Tomato Sauce");
    assert_eq!(demand[0].category.as_deref(), Some("Pantry"));
  }

  #[test]
  fn out_of_stock_items_are_always_injected() {
    let mut coffee = Ingredient::new("Coffee", 0.0, "bag");
    coffee.category = Some("Beverages".to_string());
    coffee.stock_status = Some(StockStatus::OutOfStock);
    let inventory = vec![coffee];

    let list = build_shopping_list(&[], &[], &inventory, &no_replenish(), &categories());
    let line = list.find("Coffee").unwrap();
    assert_eq!(line.amount, 1.0);
    assert_eq!(line.unit, "bag");
  }

  #[test]
  fn out_of_stock_injection_skips_names_already_in_demand() {
    let recipe = recipe_with("Cake", vec![("Sugar", 300.0, "g", Some("Pantry"), false)]);
    let mut sugar = Ingredient::new("sugar", 0.0, "g");
    sugar.stock_status = Some(StockStatus::OutOfStock);
    let inventory = vec![sugar];
    let plan = vec![PlanEntry::new(recipe.id.clone(), 1)];

    let list = build_shopping_list(&plan, &[recipe], &inventory, &no_replenish(), &categories());
    // One line only, and it is the demand line, not the quantity-1 restock.
    assert_eq!(list.item_count(), 1);
    assert_eq!(list.find("sugar").unwrap().amount, 300.0);
  }

  #[test]
  fn low_stock_items_are_opt_in() {
    let mut rice = Ingredient::new("Rice", 200.0, "g");
    rice.stock_status = Some(StockStatus::LowStock);
    let rice_id = rice.id.clone();
    let inventory = vec![rice];

    let without = build_shopping_list(&[], &[], &inventory, &no_replenish(), &categories());
    assert!(without.is_empty());

    let flagged: HashSet<String> = [rice_id].into_iter().collect();
    let with = build_shopping_list(&[], &[], &inventory, &flagged, &categories());
    assert_eq!(with.find("Rice").unwrap().amount, 1.0);
  }

  #[test]
  fn groups_follow_vocabulary_order() {
    let recipe = recipe_with(
      "Big Shop",
      vec![
        ("Detergent", 1.0, "bottle", Some("Household"), false),
        ("Apples", 6.0, "pcs", Some("Produce"), false),
        ("Milk", 1000.0, "ml", Some("Dairy"), false),
      ],
    );
    let plan = vec![PlanEntry::new(recipe.id.clone(), 1)];

    let list = build_shopping_list(&plan, &[recipe], &[], &no_replenish(), &categories());
    let order: Vec<&str> = list.groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(order, vec!["Produce", "Dairy", "Household"]);
  }

  #[test]
  fn unresolvable_categories_fall_back_to_other() {
    let recipe = recipe_with(
      "Mystery Meal",
      vec![
        ("Saffron", 1.0, "g", Some("Spices"), false), // not in the vocabulary
        ("Tofu", 200.0, "g", None, false),
      ],
    );
    let plan = vec![PlanEntry::new(recipe.id.clone(), 1)];

    let list = build_shopping_list(&plan, &[recipe], &[], &no_replenish(), &categories());
    assert_eq!(list.groups.len(), 1);
    assert_eq!(list.groups[0].category, "Other");
    assert_eq!(list.groups[0].items.len(), 2);
  }

  #[test]
  fn fallback_group_is_appended_when_missing_from_vocabulary() {
    let recipe = recipe_with("Odd", vec![("Widget", 1.0, "pcs", None, false)]);
    let plan = vec![PlanEntry::new(recipe.id.clone(), 1)];
    let vocab = vec!["Produce".to_string()]; // no "Other"

    let list = build_shopping_list(&plan, &[recipe], &[], &no_replenish(), &vocab);
    assert_eq!(list.groups.len(), 1);
    assert_eq!(list.groups[0].category, "Other");
  }

  #[test]
  fn buying_a_line_merges_into_tracked_stock() {
    let mut inventory = vec![Ingredient::new("Tomato sauce", 50.0, "ml")];
    let line = ShoppingItem {
      name: "tomato sauce".to_string(),
      amount: 150.0,
      unit: "ml".to_string(),
      category: Some("Pantry".to_string()),
    };

    add_to_inventory(&mut inventory, &line);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].amount, 200.0);
  }

  #[test]
  fn buying_marks_untracked_stock_in_stock() {
    let mut inventory = vec![untracked("Avocado", StockStatus::OutOfStock)];
    let line = ShoppingItem {
      name: "avocado".to_string(),
      amount: 3.0,
      unit: "pcs".to_string(),
      category: None,
    };

    add_to_inventory(&mut inventory, &line);
    assert!(inventory[0].untracked_amount);
    assert_eq!(inventory[0].stock_status, Some(StockStatus::InStock));
  }

  #[test]
  fn buying_an_unknown_line_creates_a_tracked_entry() {
    let mut inventory = Vec::new();
    let line = ShoppingItem {
      name: "Lemons".to_string(),
      amount: 4.0,
      unit: "pcs".to_string(),
      category: Some("Produce".to_string()),
    };

    let item_id = add_to_inventory(&mut inventory, &line);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].id, item_id);
    assert_eq!(inventory[0].amount, 4.0);
    assert!(!inventory[0].untracked_amount);
  }
}
