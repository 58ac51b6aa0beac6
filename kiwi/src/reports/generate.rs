//! Generate command report.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use kiwi_core::{FileOperationResult, WriteStatus, to_slash};
use kiwi_generate::{Generated, GeneratorKind};

use super::output::{Output, Report};

/// Outcome of one generator run, with paths shown relative to the project.
#[derive(Debug)]
pub struct GenerateReport {
    pub cwd: PathBuf,
    pub kind: GeneratorKind,
    pub results: Vec<FileOperationResult>,
}

impl GenerateReport {
    pub fn new(cwd: &Path, generated: Generated) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            kind: generated.kind,
            results: generated.results,
        }
    }

    fn failures(&self) -> impl Iterator<Item = &FileOperationResult> {
        self.results
            .iter()
            .filter(|r| r.status == WriteStatus::Failed)
    }

    fn display(&self, path: &Path) -> String {
        to_slash(path.strip_prefix(&self.cwd).unwrap_or(path))
    }

    /// Turn failed writes into an error, so the process exits non-zero.
    pub fn ensure_no_failures(&self) -> Result<()> {
        let failed = self.failures().count();
        if failed > 0 {
            bail!("{} generator finished with {} failed file(s)", self.kind, failed);
        }
        Ok(())
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in self.failures() {
            out.warning(&failure.message);
        }

        let (written, skipped): (Vec<_>, Vec<_>) = self
            .results
            .iter()
            .filter(|r| r.status != WriteStatus::Failed)
            .partition(|r| r.status == WriteStatus::Written);

        if !written.is_empty() {
            out.section(&format!("Generated ({})", self.kind));
            for result in written {
                out.added_item(&self.display(&result.path));
            }
        }

        if !skipped.is_empty() {
            out.section("Skipped");
            for result in skipped {
                out.list_item(&self.display(&result.path));
            }
        }
    }
}
