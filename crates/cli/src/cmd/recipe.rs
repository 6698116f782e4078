//! Implementation of the `culinary recipe` subcommands.

use anyhow::{Context, Result, anyhow};
use clap::{Args, Subcommand};

use culinary_lib::model::Recipe;
use culinary_lib::recipe;
use culinary_lib::store::StateStore;

use crate::output::{self, format_prep_time, format_quantity, print_info, print_json, print_success, print_warning};
use crate::parse::parse_ingredient_spec;
use crate::prompts::confirm;

#[derive(Subcommand)]
pub enum RecipeCommand {
  /// Add a recipe to the catalog
  Add(AddArgs),

  /// List all recipes
  List {
    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
  },

  /// Show one recipe in full
  Show {
    /// Recipe name or id
    recipe: String,
  },

  /// Remove a recipe from the catalog
  Remove {
    /// Recipe name or id
    recipe: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
  },

  /// Check whether a recipe can be cooked from the current pantry
  Cookable {
    /// Recipe name or id
    recipe: String,
  },
}

#[derive(Args)]
pub struct AddArgs {
  /// Recipe name
  #[arg(long)]
  name: String,

  /// Short description
  #[arg(long, default_value = "")]
  description: String,

  /// Ingredient spec `name:amount:unit[:category][:optional]` (repeatable)
  #[arg(long = "ingredient", value_name = "SPEC")]
  ingredients: Vec<String>,

  /// Free-text cooking instructions
  #[arg(long, default_value = "")]
  instructions: String,

  /// Tag for the recipe (repeatable)
  #[arg(long = "tag", value_name = "TAG")]
  tags: Vec<String>,

  /// Preparation time in minutes
  #[arg(long, value_name = "MINUTES")]
  prep_time: Option<u32>,
}

pub fn run(command: RecipeCommand) -> Result<()> {
  let store = StateStore::default_store();
  let mut state = store.load();

  match command {
    RecipeCommand::Add(args) => {
      let mut new_recipe = Recipe::new(args.name);
      new_recipe.description = args.description;
      new_recipe.instructions = args.instructions;
      new_recipe.tags = args.tags;
      new_recipe.prep_time_minutes = args.prep_time;
      for spec in &args.ingredients {
        new_recipe.ingredients.push(parse_ingredient_spec(spec)?);
      }

      let name = new_recipe.name.clone();
      recipe::add(&mut state.recipes, new_recipe);
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Added recipe '{}'", name));
    }

    RecipeCommand::List { json } => {
      if json {
        print_json(&state.recipes)?;
      } else if state.recipes.is_empty() {
        print_info("No recipes yet. Add one with 'culinary recipe add'.");
      } else {
        for r in &state.recipes {
          let mut line = format!("{} ({} ingredients)", r.name, r.ingredients.len());
          if !r.tags.is_empty() {
            line.push_str(&format!(" [{}]", r.tags.join(", ")));
          }
          if let Some(minutes) = r.prep_time_minutes {
            line.push_str(&format!(" {}", format_prep_time(minutes)));
          }
          print_info(&line);
        }
      }
    }

    RecipeCommand::Show { recipe: key } => {
      let found = recipe::find(&state.recipes, &key).ok_or_else(|| anyhow!("no recipe matching '{}'", key))?;

      println!("{}", found.name);
      if !found.description.is_empty() {
        println!("  {}", found.description);
      }
      if let Some(minutes) = found.prep_time_minutes {
        output::print_stat("Prep time", &format_prep_time(minutes));
      }
      if !found.tags.is_empty() {
        output::print_stat("Tags", &found.tags.join(", "));
      }
      println!();
      println!("Ingredients:");
      for required in &found.ingredients {
        let suffix = if required.optional { " (optional)" } else { "" };
        println!(
          "  {} {} {}{}",
          output::symbols::INFO,
          required.item.name,
          format_quantity(required.item.amount, &required.item.unit),
          suffix
        );
      }
      if !found.instructions.is_empty() {
        println!();
        println!("{}", found.instructions);
      }
    }

    RecipeCommand::Remove { recipe: key, yes } => {
      let found = recipe::find(&state.recipes, &key).ok_or_else(|| anyhow!("no recipe matching '{}'", key))?;
      let name = found.name.clone();

      if !confirm(&format!("Remove recipe '{}'?", name), yes)? {
        print_info("Nothing removed.");
        return Ok(());
      }

      recipe::remove(&mut state.recipes, &key)?;
      store.save(&state).context("Failed to save state")?;
      print_success(&format!("Removed recipe '{}'", name));
    }

    RecipeCommand::Cookable { recipe: key } => {
      let found = recipe::find(&state.recipes, &key).ok_or_else(|| anyhow!("no recipe matching '{}'", key))?;
      let missing = recipe::missing_ingredients(found, &state.inventory);

      if missing.is_empty() {
        print_success(&format!("'{}' can be cooked from the current pantry", found.name));
      } else {
        print_warning(&format!("'{}' is missing {} ingredient(s):", found.name, missing.len()));
        for name in missing {
          eprintln!("  {} {}", output::symbols::MISSING, name);
        }
      }
    }
  }

  Ok(())
}
