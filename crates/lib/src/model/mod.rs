//! Domain model for Culinary Companion.
//!
//! All entities are owned by-value by the [`AppState`] aggregate; there is
//! no reference sharing between entities, only list membership.

mod types;

pub use types::*;
