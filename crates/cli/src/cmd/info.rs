//! Implementation of the `culinary info` command.

use anyhow::Result;
use clap::Args;

use culinary_lib::store::StateStore;

use crate::output::{print_json, print_stat, print_success};

#[derive(Args)]
pub struct InfoArgs {
  /// Print as JSON
  #[arg(long)]
  json: bool,
}

pub fn run(args: InfoArgs) -> Result<()> {
  let store = StateStore::default_store();
  let state = store.load();

  if args.json {
    let value = serde_json::json!({
      "data_path": store.state_path(),
      "recipes": state.recipes.len(),
      "inventory": state.inventory.len(),
      "tags": state.custom_tags.len(),
      "categories": state.categories.len(),
    });
    print_json(&value)?;
  } else {
    print_success(&format!("Culinary Companion v{}", env!("CARGO_PKG_VERSION")));
    print_stat("Data", &store.state_path().display().to_string());
    print_stat("Recipes", &state.recipes.len().to_string());
    print_stat("Pantry items", &state.inventory.len().to_string());
    print_stat("Tags", &state.custom_tags.len().to_string());
    print_stat("Categories", &state.categories.len().to_string());
  }

  Ok(())
}
