//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: colored status
//! messages, amount and prep-time rendering, and Unicode symbols.

use std::time::Duration;

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const MISSING: &str = "✗";
}

/// Render an amount without a trailing `.0` for whole values.
pub fn format_amount(amount: f64) -> String {
  if amount.fract() == 0.0 {
    format!("{}", amount as i64)
  } else {
    format!("{}", amount)
  }
}

/// Render an amount with its unit, omitting the unit when empty.
pub fn format_quantity(amount: f64, unit: &str) -> String {
  if unit.is_empty() {
    format_amount(amount)
  } else {
    format!("{} {}", format_amount(amount), unit)
  }
}

/// Render a prep time in minutes as a human duration ("25m", "1h 30m").
pub fn format_prep_time(minutes: u32) -> String {
  humantime::format_duration(Duration::from_secs(u64::from(minutes) * 60)).to_string()
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_amount_drops_trailing_zero() {
    assert_eq!(format_amount(150.0), "150");
    assert_eq!(format_amount(1.5), "1.5");
    assert_eq!(format_amount(0.0), "0");
  }

  #[test]
  fn format_quantity_handles_missing_unit() {
    assert_eq!(format_quantity(3.0, "pcs"), "3 pcs");
    assert_eq!(format_quantity(2.0, ""), "2");
  }

  #[test]
  fn format_prep_time_is_human_readable() {
    assert_eq!(format_prep_time(25), "25m");
    assert_eq!(format_prep_time(90), "1h 30m");
  }
}
