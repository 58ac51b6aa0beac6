use std::{fmt, str::FromStr};

use eyre::{Context, Result};
use kiwi_core::Prompter;

use crate::GenerateError;

/// The generators `kiwi generate` knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Page,
    Tailwind,
    Entry,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::Page,
        GeneratorKind::Tailwind,
        GeneratorKind::Entry,
    ];

    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Page => "page",
            GeneratorKind::Tailwind => "tailwindcss",
            GeneratorKind::Entry => "entry",
        }
    }

    /// Ask the user to pick a generator.
    pub fn prompt(prompter: &dyn Prompter) -> Result<Self> {
        let names = Self::ALL.map(|kind| kind.as_str());
        let index = prompter
            .select("Select a generator", &names)
            .wrap_err("Failed to get generator selection")?;
        Ok(Self::ALL[index])
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_matches(|c| c == '"' || c == '\'');
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| GenerateError::UnknownCommand {
                name: s.to_string(),
            })
    }
}
