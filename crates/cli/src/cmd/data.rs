//! Implementation of the `culinary export`, `import` and `reset` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use culinary_lib::settings;
use culinary_lib::store::StateStore;

use crate::output::{print_info, print_success};
use crate::prompts::confirm;

#[derive(Args)]
pub struct ExportArgs {
  /// Directory to write the export into (default: current directory)
  #[arg(default_value = ".")]
  dir: PathBuf,
}

#[derive(Args)]
pub struct ImportArgs {
  /// JSON file previously produced by `culinary export`
  file: PathBuf,

  /// Skip the confirmation prompt
  #[arg(long)]
  yes: bool,
}

#[derive(Args)]
pub struct ResetArgs {
  /// Skip the confirmation prompt
  #[arg(long)]
  yes: bool,
}

pub fn run_export(args: ExportArgs) -> Result<()> {
  let store = StateStore::default_store();
  let state = store.load();

  let path = store
    .export_to_file(&state, &args.dir)
    .context("Failed to export state")?;
  print_success(&format!("Exported to {}", path.display()));

  Ok(())
}

pub fn run_import(args: ImportArgs) -> Result<()> {
  let store = StateStore::default_store();

  // Parse before prompting so an invalid file never costs a confirmation,
  // and the current state is left untouched on failure.
  let imported = StateStore::import_from_file(&args.file).context("Failed to import")?;

  if !confirm("Replace ALL current data with the imported file?", args.yes)? {
    print_info("Import cancelled.");
    return Ok(());
  }

  store.save(&imported).context("Failed to save state")?;
  print_success(&format!(
    "Imported {} recipe(s) and {} pantry item(s)",
    imported.recipes.len(),
    imported.inventory.len()
  ));

  Ok(())
}

pub fn run_reset(args: ResetArgs) -> Result<()> {
  let store = StateStore::default_store();
  let mut state = store.load();

  if !confirm("Reset ALL data to factory defaults?", args.yes)? {
    print_info("Reset cancelled.");
    return Ok(());
  }

  settings::factory_reset(&mut state);
  store.save(&state).context("Failed to save state")?;
  print_success("Reset to factory defaults");

  Ok(())
}
