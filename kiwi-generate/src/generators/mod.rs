//! Generator handlers and the dispatcher that picks one.
//!
//! Every handler follows the same sequence: resolve paths, build content,
//! write, update the configuration, and hand the outcomes back for reporting.

mod entry;
mod page;
mod tailwind;

use std::path::PathBuf;

use eyre::Result;
use kiwi_config::Config;
use kiwi_core::{FileOperationResult, Prompter};

use crate::{ColorSource, GeneratorKind, Synchronizer};

/// Input of one `kiwi generate` invocation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Project root
    pub cwd: PathBuf,
    /// Generator name; prompted for when absent
    pub kind: Option<String>,
    /// Target name (the page name for `page`)
    pub name: Option<String>,
    /// Configuration as loaded from `.kiwirc.ts`
    pub config: Config,
}

/// Collaborators a generator may call out to.
pub struct GenerateContext<'a> {
    pub prompter: &'a dyn Prompter,
    pub colors: &'a mut dyn ColorSource,
    pub sync: &'a dyn Synchronizer,
}

/// Outcome of a generator run, one entry per file touched.
#[derive(Debug)]
pub struct Generated {
    pub kind: GeneratorKind,
    pub results: Vec<FileOperationResult>,
}

/// Resolve the generator for `request` and run it.
///
/// Handlers receive the loaded configuration through the request and a
/// normalized copy whose `clientEntry` is the framework default.
pub fn generate(request: &GenerateRequest, ctx: &mut GenerateContext<'_>) -> Result<Generated> {
    let kind = match &request.kind {
        Some(name) => name.parse::<GeneratorKind>()?,
        None => GeneratorKind::prompt(ctx.prompter)?,
    };
    let normalized = request.config.normalized();

    tracing::debug!(%kind, cwd = %request.cwd.display(), "running generator");
    let results = match kind {
        GeneratorKind::Page => page::generate(request, ctx)?,
        GeneratorKind::Tailwind => tailwind::generate(request, ctx)?,
        GeneratorKind::Entry => entry::generate(request, &normalized, ctx)?,
    };

    Ok(Generated { kind, results })
}
