//! Parsing for compact command-line specs.

use anyhow::{Result, bail};
use culinary_lib::model::{Ingredient, RecipeIngredient};

/// Parse an ingredient spec of the form
/// `name:amount:unit[:category][:optional]`.
pub fn parse_ingredient_spec(spec: &str) -> Result<RecipeIngredient> {
  let fields: Vec<&str> = spec.split(':').collect();
  if fields.len() < 3 || fields.len() > 5 {
    bail!("invalid ingredient spec '{spec}' (expected name:amount:unit[:category][:optional])");
  }

  let name = fields[0].trim();
  if name.is_empty() {
    bail!("invalid ingredient spec '{spec}': empty name");
  }

  let amount: f64 = match fields[1].trim().parse() {
    Ok(amount) => amount,
    Err(_) => bail!("invalid ingredient spec '{spec}': '{}' is not a number", fields[1]),
  };

  let mut item = Ingredient::new(name, amount, fields[2].trim());

  let mut optional = false;
  for field in &fields[3..] {
    let field = field.trim();
    if field.eq_ignore_ascii_case("optional") {
      optional = true;
    } else if !field.is_empty() {
      item.category = Some(field.to_string());
    }
  }

  Ok(RecipeIngredient { item, optional })
}

/// Parse a planned-meal spec of the form `recipe[:multiplier]`.
///
/// The recipe part may be a name or an id; a missing multiplier means 1.
pub fn parse_plan_spec(spec: &str) -> Result<(String, u32)> {
  if let Some((head, tail)) = spec.rsplit_once(':') {
    if let Ok(multiplier) = tail.trim().parse::<u32>() {
      let head = head.trim();
      if head.is_empty() {
        bail!("invalid plan spec '{spec}': empty recipe");
      }
      return Ok((head.to_string(), multiplier));
    }
  }

  let name = spec.trim();
  if name.is_empty() {
    bail!("invalid plan spec '{spec}': empty recipe");
  }
  Ok((name.to_string(), 1))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn minimal_ingredient_spec() {
    let parsed = parse_ingredient_spec("Tomato sauce:100:ml").unwrap();
    assert_eq!(parsed.item.name, "Tomato sauce");
    assert_eq!(parsed.item.amount, 100.0);
    assert_eq!(parsed.item.unit, "ml");
    assert!(parsed.item.category.is_none());
    assert!(!parsed.optional);
  }

  #[test]
  fn ingredient_spec_with_category_and_optional() {
    let parsed = parse_ingredient_spec("Parmesan:30:g:Dairy:optional").unwrap();
    assert_eq!(parsed.item.category.as_deref(), Some("Dairy"));
    assert!(parsed.optional);
  }

  #[test]
  fn ingredient_spec_optional_without_category() {
    let parsed = parse_ingredient_spec("Basil:5:leaves:optional").unwrap();
    assert!(parsed.item.category.is_none());
    assert!(parsed.optional);
  }

  #[test]
  fn malformed_ingredient_specs_are_rejected() {
    assert!(parse_ingredient_spec("just-a-name").is_err());
    assert!(parse_ingredient_spec("name:abc:ml").is_err());
    assert!(parse_ingredient_spec(":100:ml").is_err());
    assert!(parse_ingredient_spec("a:1:b:c:optional:extra").is_err());
  }

  #[test]
  fn plan_spec_defaults_to_one() {
    assert_eq!(parse_plan_spec("Margherita Pizza").unwrap(), ("Margherita Pizza".to_string(), 1));
  }

  #[test]
  fn plan_spec_with_multiplier() {
    assert_eq!(parse_plan_spec("Margherita Pizza:2").unwrap(), ("Margherita Pizza".to_string(), 2));
  }

  #[test]
  fn plan_spec_keeps_colons_in_names_without_multiplier() {
    // Only a numeric tail is treated as a multiplier.
    assert_eq!(parse_plan_spec("Soup: the sequel").unwrap(), ("Soup: the sequel".to_string(), 1));
  }

  #[test]
  fn empty_plan_spec_is_rejected() {
    assert!(parse_plan_spec("  ").is_err());
    assert!(parse_plan_spec(":2").is_err());
  }
}
