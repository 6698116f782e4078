use std::io::{self, IsTerminal, Write};

use anyhow::{Result, bail};

/// Ask the user to confirm a destructive action.
///
/// `assume_yes` (the `--yes` flag) skips the prompt entirely. Outside an
/// interactive terminal the prompt cannot be answered, so the action is
/// refused instead of silently proceeding.
pub fn confirm(message: &str, assume_yes: bool) -> Result<bool> {
  if assume_yes {
    return Ok(true);
  }

  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!("Cannot prompt for confirmation in non-interactive mode. Use --yes to proceed.");
  }

  write!(io::stderr(), "{} [y/N] ", message)?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
