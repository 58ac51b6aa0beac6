//! Generators for the `kiwi generate` command.
//!
//! Each generator turns a [`GenerateRequest`] into files under the project
//! directory and, where relevant, a patched `.kiwirc.ts`.

mod color;
mod error;
pub mod files;
pub mod generators;
mod imports;
mod kind;
pub mod sync;

#[cfg(test)]
mod testing;

pub use color::{ColorSource, RandomColor};
pub use error::GenerateError;
pub use generators::{GenerateContext, GenerateRequest, Generated, generate};
pub use imports::{is_relative_specifier, rewrite_imports};
pub use kind::GeneratorKind;
pub use sync::{Mode, SyncOptions, Synchronizer, TemplateSync};
