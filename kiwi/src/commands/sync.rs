use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kiwi_config::Config;
use kiwi_generate::{Mode, SyncOptions, Synchronizer, TemplateSync, sync::tmp_dir};

use super::{UnwrapOrExit, generate::project_dir};
use crate::reports::{Report, SyncReport, TerminalOutput};

#[derive(Args)]
pub struct SyncCommand {
    /// Mode to generate the framework files for
    #[arg(short, long, default_value = "development")]
    pub mode: Mode,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, default_value = ".")]
    pub cwd: PathBuf,
}

impl SyncCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = project_dir(&self.cwd)?;
        let config = Config::load(&cwd).unwrap_or_exit();
        let tmp = tmp_dir(&cwd);

        TemplateSync.sync(&SyncOptions {
            config: &config,
            cwd: &cwd,
            tmp_dir: &tmp,
            mode: self.mode,
        })?;

        SyncReport {
            tmp_dir: tmp,
            mode: self.mode,
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_sync_writes_framework_files() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src/pages")).unwrap();
        std::fs::write(temp.path().join("src/pages/index.tsx"), "").unwrap();

        SyncCommand {
            mode: Mode::Production,
            cwd: temp.path().to_path_buf(),
        }
        .run()
        .unwrap();

        let tmp = temp.path().join("src/.kiwi");
        assert!(tmp.join("client.tsx").exists());
        let routes = std::fs::read_to_string(tmp.join("core/routes.ts")).unwrap();
        assert!(routes.contains("../../pages/index"));
    }
}
