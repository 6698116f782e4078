//! Shopping-list derivation from a meal plan.
//!
//! The list is computed, never stored: aggregate ingredient demand over the
//! planned meals, net it against what the pantry already holds, then inject
//! replenishment lines for depleted items and group by category.

mod aggregate;
mod types;

pub use aggregate::*;
pub use types::*;
