//! Synchronization of framework-internal files into the temp directory.
//!
//! The entry generator copies `src/.kiwi/client.tsx` out of the temp
//! directory; when that directory is missing it asks a [`Synchronizer`] to
//! materialize it first.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use eyre::{Context, Result, bail};
use kiwi_config::Config;
use kiwi_core::{GeneratedFile, NonInteractive};

use crate::files::{ClientTemplate, PAGES_DIR, PluginsTs, RoutesTs};

/// Temp directory, relative to the project root.
pub const TMP_DIR: &str = "src/.kiwi";

/// Build mode the framework files are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            _ => Err(format!(
                "invalid mode '{}', expected 'development' or 'production'",
                s
            )),
        }
    }
}

/// Inputs of one synchronization run.
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions<'a> {
    pub config: &'a Config,
    pub cwd: &'a Path,
    pub tmp_dir: &'a Path,
    pub mode: Mode,
}

/// Materializes framework template files into a temp directory.
pub trait Synchronizer {
    fn sync(&self, opts: &SyncOptions<'_>) -> Result<()>;
}

/// The built-in synchronizer: renders the entry template, the route table
/// and the plugin list.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateSync;

impl TemplateSync {
    /// Stems of the `.tsx` files directly under `src/pages`.
    fn discover_pages(cwd: &Path) -> Result<Vec<String>> {
        let dir = cwd.join(PAGES_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .wrap_err_with(|| format!("Failed to read {}", dir.display()))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "tsx") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    pages.push(stem.to_string());
                }
            }
        }
        Ok(pages)
    }
}

impl Synchronizer for TemplateSync {
    fn sync(&self, opts: &SyncOptions<'_>) -> Result<()> {
        tracing::info!(tmp_dir = %opts.tmp_dir.display(), mode = %opts.mode, "synchronizing framework files");

        let pages = Self::discover_pages(opts.cwd)?;
        let files: [&dyn GeneratedFile; 3] = [
            &ClientTemplate::new(opts.config.tailwind_enabled()),
            &RoutesTs::new(pages),
            &PluginsTs::new(opts.mode),
        ];

        // Framework files are always regenerated, nothing to confirm.
        let prompter = NonInteractive::new(None);
        for file in files {
            let result = file.write(opts.tmp_dir, &prompter);
            if !result.is_success() {
                bail!("{}", result.message);
            }
        }
        Ok(())
    }
}

/// Absolute temp directory for a project.
pub fn tmp_dir(cwd: &Path) -> PathBuf {
    cwd.join(TMP_DIR)
}
