//! Implementation of the `culinary shopping` command.
//!
//! Builds the derived shopping list for a set of planned meals, optionally
//! moves purchased lines back into the pantry.

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use culinary_lib::store::StateStore;
use culinary_lib::{inventory, recipe, shopping};

use crate::output::{self, format_quantity, print_info, print_json, print_success};
use crate::parse::parse_plan_spec;

#[derive(Args)]
pub struct ShoppingArgs {
  /// Planned meal `recipe[:multiplier]`, by name or id (repeatable)
  #[arg(long = "recipe", value_name = "NAME[:N]")]
  recipes: Vec<String>,

  /// Low-stock pantry item to replenish, by name or id (repeatable)
  #[arg(long = "replenish", value_name = "ITEM")]
  replenish: Vec<String>,

  /// Move a listed line into the pantry after building the list (repeatable)
  #[arg(long = "buy", value_name = "ITEM")]
  buy: Vec<String>,

  /// Print the grouped list as JSON
  #[arg(long)]
  json: bool,
}

pub fn run(args: ShoppingArgs) -> Result<()> {
  let store = StateStore::default_store();
  let mut state = store.load();

  // Resolve the plan: names become ids, multiplier 0 entries are dropped
  // by the aggregator.
  let mut plan = Vec::new();
  for spec in &args.recipes {
    let (key, multiplier) = parse_plan_spec(spec)?;
    let planned = recipe::find(&state.recipes, &key).ok_or_else(|| anyhow!("no recipe matching '{}'", key))?;
    plan.push(shopping::PlanEntry::new(planned.id.clone(), multiplier));
  }

  let mut replenish_ids = HashSet::new();
  for key in &args.replenish {
    let item = inventory::find(&state.inventory, key).ok_or_else(|| anyhow!("no inventory item matching '{}'", key))?;
    replenish_ids.insert(item.id.clone());
  }

  let list = shopping::build_shopping_list(
    &plan,
    &state.recipes,
    &state.inventory,
    &replenish_ids,
    &state.categories,
  );

  if args.json {
    print_json(&list)?;
  } else if list.is_empty() {
    print_info("Nothing to buy.");
  } else {
    for group in &list.groups {
      println!("{}", group.category);
      for item in &group.items {
        println!(
          "  {} {}  {}",
          output::symbols::INFO,
          item.name,
          format_quantity(item.amount, &item.unit)
        );
      }
      println!();
    }
    print_info(&format!("{} item(s) to buy", list.item_count()));
  }

  // Purchases mutate the pantry through the same merge rule as a manual add.
  if !args.buy.is_empty() {
    for key in &args.buy {
      let line = list.find(key).ok_or_else(|| anyhow!("'{}' is not on the shopping list", key))?;
      shopping::add_to_inventory(&mut state.inventory, line);
      print_success(&format!("Moved '{}' into the pantry", line.name));
    }
    store.save(&state).context("Failed to save state")?;
  }

  Ok(())
}
