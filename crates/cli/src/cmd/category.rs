//! Implementation of the `culinary category` subcommands.

use anyhow::{Context, Result};
use clap::Subcommand;

use culinary_lib::settings::{self, SettingsError};
use culinary_lib::store::StateStore;

use crate::output::{print_info, print_success, print_warning};

#[derive(Subcommand)]
pub enum CategoryCommand {
  /// Add a category to the vocabulary
  Add {
    /// Category name
    category: String,
  },

  /// Remove a category, reassigning its items to the fallback
  Remove {
    /// Category name
    category: String,
  },

  /// List the category vocabulary
  List,
}

pub fn run(command: CategoryCommand) -> Result<()> {
  let store = StateStore::default_store();
  let mut state = store.load();

  match command {
    CategoryCommand::Add { category } => {
      settings::add_category(&mut state, &category)?;
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Added category '{}'", category));
    }

    CategoryCommand::Remove { category } => {
      match settings::remove_category(&mut state, &category) {
        Ok(reassigned) => {
          store.save(&state).context("Failed to save state")?;
          if reassigned > 0 {
            print_success(&format!(
              "Removed category '{}'; {} item(s) moved to 'Other'",
              category, reassigned
            ));
          } else {
            print_success(&format!("Removed category '{}'", category));
          }
        }
        // Deliberate no-op: the vocabulary must never become empty.
        Err(SettingsError::LastCategory) => {
          print_warning("Cannot delete the last remaining category.");
        }
        Err(e) => return Err(e.into()),
      }
    }

    CategoryCommand::List => {
      for category in &state.categories {
        print_info(category);
      }
    }
  }

  Ok(())
}
