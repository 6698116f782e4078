//! Culinary Companion CLI entry point.
//!
//! Each subcommand is a thin view over `culinary-lib`: load the aggregate,
//! apply one mutation or derivation, save, print. Business rules live in the
//! library; this crate only wires arguments, prompts and output.

mod cmd;
mod output;
mod parse;
mod prompts;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Culinary Companion - recipes, pantry and shopping lists
#[derive(Parser)]
#[command(name = "culinary", version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Manage the recipe catalog
  #[command(subcommand)]
  Recipe(cmd::RecipeCommand),

  /// Manage the pantry inventory
  #[command(subcommand)]
  Inventory(cmd::InventoryCommand),

  /// Derive a shopping list from planned meals
  Shopping(cmd::ShoppingArgs),

  /// Manage the tag vocabulary
  #[command(subcommand)]
  Tag(cmd::TagCommand),

  /// Manage the category vocabulary
  #[command(subcommand)]
  Category(cmd::CategoryCommand),

  /// Export the full state to a dated JSON file
  Export(cmd::ExportArgs),

  /// Replace the full state from a JSON file
  Import(cmd::ImportArgs),

  /// Reset all state to factory defaults
  Reset(cmd::ResetArgs),

  /// Show where data lives and what it holds
  Info(cmd::InfoArgs),
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Recipe(command) => cmd::recipe::run(command),
    Commands::Inventory(command) => cmd::inventory::run(command),
    Commands::Shopping(args) => cmd::shopping::run(args),
    Commands::Tag(command) => cmd::tag::run(command),
    Commands::Category(command) => cmd::category::run(command),
    Commands::Export(args) => cmd::data::run_export(args),
    Commands::Import(args) => cmd::data::run_import(args),
    Commands::Reset(args) => cmd::data::run_reset(args),
    Commands::Info(args) => cmd::info::run(args),
  }
}
