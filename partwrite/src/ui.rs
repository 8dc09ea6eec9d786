//! Confirmation prompt for destructive operations.

use anyhow::{Context, Result};
use dialoguer::Confirm;

/// Blocking yes/no gate. Defaults to No so a bare Enter aborts.
pub fn confirm_destructive_action(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation input")
}
