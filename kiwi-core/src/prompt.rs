//! User interaction capability.
//!
//! Writers and the command dispatcher never talk to the terminal directly;
//! they go through a [`Prompter`] so tests can answer deterministically.

use eyre::{Result, bail};

/// Yes/no and single-choice questions asked during generation.
///
/// Implementations must be shareable across threads: the tailwind generator
/// writes its files concurrently and each write may ask independently.
pub trait Prompter: Sync {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Ask the user to pick one of `items`, returning its index.
    fn select(&self, message: &str, items: &[&str]) -> Result<usize>;
}

/// Prompter used when no terminal interaction is allowed.
///
/// With `Some(answer)` every confirmation gets `answer`; with `None` any
/// question is an error.
#[derive(Debug, Clone, Copy)]
pub struct NonInteractive {
    answer: Option<bool>,
}

impl NonInteractive {
    pub fn new(answer: Option<bool>) -> Self {
        Self { answer }
    }
}

impl Prompter for NonInteractive {
    fn confirm(&self, message: &str) -> Result<bool> {
        match self.answer {
            Some(answer) => Ok(answer),
            None => bail!("cannot ask '{}' in non-interactive mode", message),
        }
    }

    fn select(&self, message: &str, _items: &[&str]) -> Result<usize> {
        bail!("cannot ask '{}' in non-interactive mode", message)
    }
}
