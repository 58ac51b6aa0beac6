//! Terminal prompts backed by dialoguer.

use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use kiwi_core::Prompter;
use parking_lot::Mutex;

/// Asks on the terminal, one question at a time.
///
/// Generators may prompt from several threads; the lock keeps two questions
/// from being drawn over each other.
#[derive(Default)]
pub struct TerminalPrompter {
    terminal: Mutex<()>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        let _guard = self.terminal.lock();
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }

    fn select(&self, message: &str, items: &[&str]) -> Result<usize> {
        let _guard = self.terminal.lock();
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .wrap_err("Failed to get selection")
    }
}
