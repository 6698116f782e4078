//! Inventory mutation rules.
//!
//! The inventory is a flat list of [`Ingredient`]s where the
//! case-insensitively normalized name acts as the natural key: merging never
//! duplicates an entry, and every lookup accepts an id or a name.
//!
//! Items come in two representations:
//! - *tracked*: the numeric `amount`/`unit` pair is authoritative
//! - *untracked*: only the qualitative [`StockStatus`] counts

use crate::model::{Ingredient, StockStatus};
use crate::util::name;

/// Error returned when an inventory item cannot be resolved.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no inventory item matching '{0}'")]
pub struct ItemNotFound(pub String);

/// Look up an item by exact id or case-insensitive name.
pub fn find<'a>(inventory: &'a [Ingredient], key: &str) -> Option<&'a Ingredient> {
  inventory
    .iter()
    .find(|i| i.id == key)
    .or_else(|| inventory.iter().find(|i| name::matches(&i.name, key)))
}

fn find_mut<'a>(inventory: &'a mut [Ingredient], key: &str) -> Result<&'a mut Ingredient, ItemNotFound> {
  let idx = inventory
    .iter()
    .position(|i| i.id == key)
    .or_else(|| inventory.iter().position(|i| name::matches(&i.name, key)));
  match idx {
    Some(idx) => Ok(&mut inventory[idx]),
    None => Err(ItemNotFound(key.to_string())),
  }
}

/// Add an item to the inventory, merging with an existing entry when the
/// name matches case-insensitively.
///
/// # Merge rules
///
/// - No match: the item is appended as-is (it already carries a fresh id).
/// - Incoming untracked: the existing entry becomes untracked and adopts the
///   incoming stock status.
/// - Incoming tracked onto an untracked entry: the entry switches back to
///   tracked and the amount is replaced, not added.
/// - Incoming tracked onto a tracked entry: amounts accumulate (restock).
///
/// The existing entry keeps its identity, unit and category. Returns the id
/// of the affected entry.
pub fn add_or_merge(inventory: &mut Vec<Ingredient>, new_item: Ingredient) -> String {
  match inventory.iter_mut().find(|i| name::matches(&i.name, &new_item.name)) {
    Some(existing) => {
      if new_item.untracked_amount {
        existing.untracked_amount = true;
        existing.stock_status = new_item.stock_status;
      } else if existing.untracked_amount {
        existing.untracked_amount = false;
        existing.amount = new_item.amount;
      } else {
        existing.amount += new_item.amount;
      }
      existing.id.clone()
    }
    None => {
      let item_id = new_item.id.clone();
      inventory.push(new_item);
      item_id
    }
  }
}

/// Apply a delta to an item's amount, flooring the result at zero.
///
/// Returns the new amount.
pub fn adjust_amount(inventory: &mut [Ingredient], key: &str, delta: f64) -> Result<f64, ItemNotFound> {
  let item = find_mut(inventory, key)?;
  item.amount = (item.amount + delta).max(0.0);
  Ok(item.amount)
}

/// Set an item's qualitative stock status.
pub fn set_stock_status(
  inventory: &mut [Ingredient],
  key: &str,
  status: StockStatus,
) -> Result<(), ItemNotFound> {
  let item = find_mut(inventory, key)?;
  item.stock_status = Some(status);
  Ok(())
}

/// Flip an item between tracked and untracked representation.
///
/// An item that ends up without any stock status gets `in-stock` so the
/// qualitative level is never undefined. Returns the new untracked flag.
pub fn toggle_untracked(inventory: &mut [Ingredient], key: &str) -> Result<bool, ItemNotFound> {
  let item = find_mut(inventory, key)?;
  item.untracked_amount = !item.untracked_amount;
  if item.stock_status.is_none() {
    item.stock_status = Some(StockStatus::InStock);
  }
  Ok(item.untracked_amount)
}

/// Remove an item, returning it.
pub fn remove(inventory: &mut Vec<Ingredient>, key: &str) -> Result<Ingredient, ItemNotFound> {
  let idx = inventory
    .iter()
    .position(|i| i.id == key)
    .or_else(|| inventory.iter().position(|i| name::matches(&i.name, key)))
    .ok_or_else(|| ItemNotFound(key.to_string()))?;
  Ok(inventory.remove(idx))
}

/// Move every item in the `from` category to the `to` category.
///
/// Returns how many items changed.
pub fn reassign_category(inventory: &mut [Ingredient], from: &str, to: &str) -> usize {
  let mut changed = 0;
  for item in inventory.iter_mut() {
    if item.category.as_deref().is_some_and(|c| name::matches(c, from)) {
      item.category = Some(to.to_string());
      changed += 1;
    }
  }
  changed
}

/// Stock-status tag for presentation.
///
/// Untracked items report their qualitative status (`in-stock` when unset).
/// Tracked items report `out-of-stock` at amount zero, otherwise their
/// explicit status, otherwise `in-stock`.
pub fn effective_status(item: &Ingredient) -> StockStatus {
  if item.untracked_amount {
    return item.stock_status.unwrap_or(StockStatus::InStock);
  }
  if item.amount <= 0.0 {
    return StockStatus::OutOfStock;
  }
  item.stock_status.unwrap_or(StockStatus::InStock)
}
