//! Core utilities and types for the kiwi scaffolding CLI.
//!
//! This crate provides the file writer, the prompt capability and the
//! path helpers shared by every generator.

mod file;
mod prompt;
mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// File operations
pub use file::{File, FileOperationResult, FileRules, GeneratedFile, Overwrite, WriteStatus};
// Prompting
pub use prompt::{NonInteractive, Prompter};
// String and path utilities
pub use utils::{capitalize, normalize_path, relative_path, to_slash};
