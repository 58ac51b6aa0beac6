//! Test utilities for code that prompts.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use eyre::{Result, eyre};
use parking_lot::Mutex;

use crate::prompt::Prompter;

/// A [`Prompter`] with canned answers.
///
/// Confirmations are answered by the first rule whose key is a substring of
/// the question; unmatched questions default to `true`. Every question asked
/// is recorded in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Vec<(String, bool)>,
    selection: Option<usize>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `value` to any confirmation mentioning `key`.
    pub fn answer(mut self, key: impl Into<String>, value: bool) -> Self {
        self.answers.push((key.into(), value));
        self
    }

    /// Pick the item at `index` for any selection.
    pub fn select_index(mut self, index: usize) -> Self {
        self.selection = Some(index);
        self
    }

    /// Questions asked so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.asked.lock().push(message.to_string());
        Ok(self
            .answers
            .iter()
            .find(|(key, _)| message.contains(key.as_str()))
            .map(|(_, value)| *value)
            .unwrap_or(true))
    }

    fn select(&self, message: &str, items: &[&str]) -> Result<usize> {
        self.asked.lock().push(message.to_string());
        let index = self
            .selection
            .ok_or_else(|| eyre!("no scripted selection for '{}'", message))?;
        if index >= items.len() {
            return Err(eyre!("scripted selection {} out of range", index));
        }
        Ok(index)
    }
}
