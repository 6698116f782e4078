//! Implementation of the `culinary tag` subcommands.

use anyhow::{Context, Result};
use clap::Subcommand;

use culinary_lib::settings;
use culinary_lib::store::StateStore;

use crate::output::{print_info, print_success};

#[derive(Subcommand)]
pub enum TagCommand {
  /// Add a tag to the vocabulary
  Add {
    /// Tag name
    tag: String,
  },

  /// Remove a tag from the vocabulary and from every recipe
  Remove {
    /// Tag name
    tag: String,
  },

  /// List the tag vocabulary
  List,
}

pub fn run(command: TagCommand) -> Result<()> {
  let store = StateStore::default_store();
  let mut state = store.load();

  match command {
    TagCommand::Add { tag } => {
      settings::add_tag(&mut state, &tag)?;
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Added tag '{}'", tag));
    }

    TagCommand::Remove { tag } => {
      settings::remove_tag(&mut state, &tag)?;
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Removed tag '{}' from the vocabulary and all recipes", tag));
    }

    TagCommand::List => {
      for tag in &state.custom_tags {
        print_info(tag);
      }
    }
  }

  Ok(())
}
