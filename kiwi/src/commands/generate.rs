use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use kiwi_config::Config;
use kiwi_core::{NonInteractive, Prompter};
use kiwi_generate::{GenerateContext, GenerateRequest, RandomColor, TemplateSync, generate};

use super::UnwrapOrExit;
use crate::{
    prompt::TerminalPrompter,
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Generator to run: page, tailwindcss or entry (prompted when omitted)
    #[arg(value_name = "TYPE")]
    pub kind: Option<String>,

    /// Page name, e.g. "about" creates src/pages/about.tsx
    pub name: Option<String>,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, default_value = ".")]
    pub cwd: PathBuf,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = project_dir(&self.cwd)?;
        let config = Config::load(&cwd).unwrap_or_exit();
        tracing::debug!(cwd = %cwd.display(), ?config, "loaded configuration");

        let request = GenerateRequest {
            cwd: cwd.clone(),
            kind: self.kind.clone(),
            name: self.name.clone(),
            config,
        };

        let terminal = TerminalPrompter::new();
        let assume_yes = NonInteractive::new(Some(true));
        let prompter: &dyn Prompter = if self.yes { &assume_yes } else { &terminal };
        let mut colors = RandomColor::from_os_rng();

        let generated = generate(
            &request,
            &mut GenerateContext {
                prompter,
                colors: &mut colors,
                sync: &TemplateSync,
            },
        )?;

        let report = GenerateReport::new(&cwd, generated);
        report.render(&mut TerminalOutput::new());
        report.ensure_no_failures()
    }
}

/// Absolute project directory, so import paths are computed from real roots.
pub(super) fn project_dir(dir: &Path) -> Result<PathBuf> {
    std::path::absolute(dir)
        .map(|p| kiwi_core::normalize_path(&p))
        .wrap_err_with(|| format!("Failed to resolve project directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_dir_is_absolute() {
        let dir = project_dir(Path::new("./some/../project")).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("project"));
        assert!(!dir.to_string_lossy().contains(".."));
    }
}
