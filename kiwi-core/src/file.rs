use std::path::{Path, PathBuf};

use eyre::Result;

use crate::prompt::Prompter;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Build a [`File`] rooted at `base`
    fn to_file(&self, base: &Path) -> File {
        File {
            path: self.path(base),
            content: self.render(),
            rules: self.rules(),
        }
    }

    /// Write the file to disk
    fn write(&self, base: &Path, prompter: &dyn Prompter) -> FileOperationResult {
        self.to_file(base).write(prompter)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Final state of a single write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// File was written
    Written,
    /// File was left untouched (already exists, overwrite declined)
    Skipped,
    /// Writing failed
    Failed,
}

/// Outcome of one file write, kept for end-of-run reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOperationResult {
    pub path: PathBuf,
    pub status: WriteStatus,
    pub message: String,
}

impl FileOperationResult {
    pub fn written(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: WriteStatus::Written,
            message: message.into(),
        }
    }

    pub fn skipped(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: WriteStatus::Skipped,
            message: message.into(),
        }
    }

    pub fn failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: WriteStatus::Failed,
            message: message.into(),
        }
    }

    /// Whether the content reached the disk
    pub fn is_success(&self) -> bool {
        self.status == WriteStatus::Written
    }
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules.
    ///
    /// I/O and prompt errors are folded into a [`WriteStatus::Failed`]
    /// result instead of being returned.
    pub fn write(&self, prompter: &dyn Prompter) -> FileOperationResult {
        let existed = self.exists();

        if existed {
            match &self.rules.overwrite {
                Overwrite::Always => {}
                Overwrite::Confirm(message) => match prompter.confirm(message) {
                    Ok(true) => {}
                    Ok(false) => {
                        tracing::debug!(path = %self.path.display(), "overwrite declined");
                        return FileOperationResult::skipped(
                            &self.path,
                            format!("Skipped {}", self.path.display()),
                        );
                    }
                    Err(e) => {
                        return FileOperationResult::failed(
                            &self.path,
                            format!("Failed to confirm {}: {}", self.path.display(), e),
                        );
                    }
                },
            }
        }

        match write_file(&self.path, &self.content) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
                let verb = if existed { "Overwrote" } else { "Created" };
                FileOperationResult::written(
                    &self.path,
                    format!("{} {}", verb, self.path.display()),
                )
            }
            Err(e) => FileOperationResult::failed(
                &self.path,
                format!("Failed to write {}: {}", self.path.display(), e),
            ),
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for a file that asks before replacing an existing copy.
    pub fn confirm(message: impl Into<String>) -> Self {
        Self {
            overwrite: Overwrite::Confirm(message.into()),
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    #[default]
    Always,
    /// Ask the user with the given question before overwriting
    Confirm(String),
}
