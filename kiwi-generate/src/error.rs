use std::path::PathBuf;

use thiserror::Error;

/// Precondition failures that abort a generator before it writes anything.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unknown command '{name}', expected one of: page, tailwindcss, entry")]
    UnknownCommand { name: String },

    #[error("a page name is required, e.g. `kiwi generate page about`")]
    MissingName,

    #[error("invalid page name '{name}', expected a path relative to src/pages like `about` or `users/list`")]
    InvalidName { name: String },

    #[error("{} already exists", path.display())]
    PageExists { path: PathBuf },

    #[error("entry template {} not found after synchronization", path.display())]
    TemplateMissing { path: PathBuf },
}
