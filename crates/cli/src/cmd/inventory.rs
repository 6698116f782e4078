//! Implementation of the `culinary inventory` subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use culinary_lib::model::{Ingredient, StockStatus};
use culinary_lib::store::StateStore;
use culinary_lib::{inventory, settings};

use crate::output::{self, format_quantity, print_info, print_json, print_success};
use crate::prompts::confirm;

#[derive(Subcommand)]
pub enum InventoryCommand {
  /// Add an item, merging with a same-named entry
  Add(AddArgs),

  /// List the pantry
  List {
    /// Print the inventory as JSON
    #[arg(long)]
    json: bool,
  },

  /// Adjust an item's amount by a delta (floored at zero)
  Adjust {
    /// Item name or id
    item: String,

    /// Signed amount delta, e.g. -50
    #[arg(long, allow_negative_numbers = true)]
    delta: f64,
  },

  /// Set an item's qualitative stock status
  Status {
    /// Item name or id
    item: String,

    /// One of in-stock, low-stock, out-of-stock
    status: StockStatus,
  },

  /// Toggle an item between tracked and untracked
  Untracked {
    /// Item name or id
    item: String,
  },

  /// Remove an item from the pantry
  Remove {
    /// Item name or id
    item: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
  },

  /// Remove every item from the pantry
  Clear {
    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
  },
}

#[derive(Args)]
pub struct AddArgs {
  /// Item name
  #[arg(long)]
  name: String,

  /// Numeric amount (ignored for stock decisions when --untracked)
  #[arg(long, default_value_t = 0.0)]
  amount: f64,

  /// Unit string, e.g. g, ml, pcs
  #[arg(long, default_value = "")]
  unit: String,

  /// Shopping category
  #[arg(long)]
  category: Option<String>,

  /// Track this item by stock status instead of amount
  #[arg(long)]
  untracked: bool,

  /// Initial stock status (defaults to in-stock for untracked items)
  #[arg(long)]
  status: Option<StockStatus>,
}

pub fn run(command: InventoryCommand) -> Result<()> {
  let store = StateStore::default_store();
  let mut state = store.load();

  match command {
    InventoryCommand::Add(args) => {
      let mut item = Ingredient::new(args.name.clone(), args.amount, args.unit);
      item.category = args.category;
      item.untracked_amount = args.untracked;
      item.stock_status = args.status;
      if item.untracked_amount && item.stock_status.is_none() {
        item.stock_status = Some(StockStatus::InStock);
      }

      inventory::add_or_merge(&mut state.inventory, item);
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Stocked '{}'", args.name));
    }

    InventoryCommand::List { json } => {
      if json {
        print_json(&state.inventory)?;
      } else if state.inventory.is_empty() {
        print_info("The pantry is empty. Add items with 'culinary inventory add'.");
      } else {
        for item in &state.inventory {
          let status = inventory::effective_status(item);
          let quantity = if item.untracked_amount {
            "untracked".to_string()
          } else {
            format_quantity(item.amount, &item.unit)
          };
          let category = item.category.as_deref().unwrap_or("-");
          print_info(&format!("{}: {} ({}) [{}]", item.name, quantity, status, category));
        }
      }
    }

    InventoryCommand::Adjust { item, delta } => {
      let new_amount = inventory::adjust_amount(&mut state.inventory, &item, delta)?;
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("'{}' now at {}", item, output::format_amount(new_amount)));
    }

    InventoryCommand::Status { item, status } => {
      inventory::set_stock_status(&mut state.inventory, &item, status)?;
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("'{}' marked {}", item, status));
    }

    InventoryCommand::Untracked { item } => {
      let untracked = inventory::toggle_untracked(&mut state.inventory, &item)?;
      store.save(&state).context("Failed to save state")?;
      if untracked {
        print_success(&format!("'{}' is now tracked by stock status only", item));
      } else {
        print_success(&format!("'{}' is now tracked by amount", item));
      }
    }

    InventoryCommand::Remove { item, yes } => {
      if !confirm(&format!("Remove '{}' from the pantry?", item), yes)? {
        print_info("Nothing removed.");
        return Ok(());
      }

      let removed = inventory::remove(&mut state.inventory, &item)?;
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Removed '{}'", removed.name));
    }

    InventoryCommand::Clear { yes } => {
      if !confirm("Remove ALL pantry items?", yes)? {
        print_info("Nothing removed.");
        return Ok(());
      }

      let count = settings::clear_inventory(&mut state);
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Cleared {} item(s)", count));
    }
  }

  Ok(())
}
