//! Tag and category vocabulary maintenance.
//!
//! Vocabulary edits cascade across the aggregate so no recipe or inventory
//! item is left pointing at a deleted entry.

use crate::consts::FALLBACK_CATEGORY;
use crate::model::AppState;
use crate::util::name;

/// Error for vocabulary operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
  /// At least one category must remain at all times.
  #[error("cannot delete the last remaining category")]
  LastCategory,
  #[error("no such tag: '{0}'")]
  UnknownTag(String),
  #[error("no such category: '{0}'")]
  UnknownCategory(String),
  #[error("'{0}' already exists")]
  Duplicate(String),
}

/// Add a tag to the vocabulary.
pub fn add_tag(state: &mut AppState, tag: &str) -> Result<(), SettingsError> {
  if state.custom_tags.iter().any(|t| name::matches(t, tag)) {
    return Err(SettingsError::Duplicate(tag.to_string()));
  }
  state.custom_tags.push(tag.trim().to_string());
  Ok(())
}

/// Remove a tag from the vocabulary and from every recipe carrying it.
pub fn remove_tag(state: &mut AppState, tag: &str) -> Result<(), SettingsError> {
  let Some(pos) = state.custom_tags.iter().position(|t| name::matches(t, tag)) else {
    return Err(SettingsError::UnknownTag(tag.to_string()));
  };
  let removed = state.custom_tags.remove(pos);
  for recipe in &mut state.recipes {
    recipe.tags.retain(|t| !name::matches(t, &removed));
  }
  Ok(())
}

/// Add a category to the vocabulary.
pub fn add_category(state: &mut AppState, category: &str) -> Result<(), SettingsError> {
  if state.categories.iter().any(|c| name::matches(c, category)) {
    return Err(SettingsError::Duplicate(category.to_string()));
  }
  state.categories.push(category.trim().to_string());
  Ok(())
}

/// Remove a category, reassigning everything that carried it.
///
/// Every recipe ingredient and inventory item in the deleted category moves
/// to the fallback category, which is appended to the vocabulary when
/// missing. Refused when only one category remains. Returns how many
/// entities were reassigned.
pub fn remove_category(state: &mut AppState, category: &str) -> Result<usize, SettingsError> {
  let Some(pos) = state.categories.iter().position(|c| name::matches(c, category)) else {
    return Err(SettingsError::UnknownCategory(category.to_string()));
  };
  if state.categories.len() == 1 {
    return Err(SettingsError::LastCategory);
  }
  let removed = state.categories.remove(pos);

  let mut reassigned = crate::inventory::reassign_category(&mut state.inventory, &removed, FALLBACK_CATEGORY);
  for recipe in &mut state.recipes {
    for required in &mut recipe.ingredients {
      if required.item.category.as_deref().is_some_and(|c| name::matches(c, &removed)) {
        required.item.category = Some(FALLBACK_CATEGORY.to_string());
        reassigned += 1;
      }
    }
  }

  let fallback_present = state.categories.iter().any(|c| name::matches(c, FALLBACK_CATEGORY));
  if reassigned > 0 && !fallback_present && !name::matches(&removed, FALLBACK_CATEGORY) {
    state.categories.push(FALLBACK_CATEGORY.to_string());
  }

  Ok(reassigned)
}

/// Empty the pantry, returning how many items were dropped.
///
/// Recipes and vocabularies are untouched.
pub fn clear_inventory(state: &mut AppState) -> usize {
  let count = state.inventory.len();
  state.inventory.clear();
  count
}

/// Reset the whole aggregate to factory defaults.
pub fn factory_reset(state: &mut AppState) {
  *state = AppState::default();
}
