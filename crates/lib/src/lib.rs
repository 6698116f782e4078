//! culinary-lib: Core types and logic for Culinary Companion
//!
//! This crate provides the fundamental pieces used throughout Culinary
//! Companion:
//! - `model`: the `AppState` aggregate and the entities it owns
//! - `store`: JSON persistence plus manual export/import round trips
//! - `inventory`: pantry mutation rules
//! - `recipe`: recipe catalog rules and the cookability check
//! - `shopping`: shopping-list derivation from a meal plan
//! - `settings`: tag and category vocabulary maintenance

pub mod consts;
pub mod inventory;
pub mod model;
pub mod paths;
pub mod recipe;
pub mod settings;
pub mod shopping;
pub mod store;
pub mod util;
