//! Entity identity generation.

use uuid::Uuid;

/// Generate a fresh opaque entity id.
pub fn new_id() -> String {
  Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_are_unique() {
    assert_ne!(new_id(), new_id());
  }

  #[test]
  fn ids_are_not_empty() {
    assert!(!new_id().is_empty());
  }
}
