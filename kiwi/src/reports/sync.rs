//! Sync command report.

use std::path::PathBuf;

use kiwi_generate::Mode;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct SyncReport {
    /// Directory the framework files were written to.
    pub tmp_dir: PathBuf,
    pub mode: Mode,
}

impl Report for SyncReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Synchronized", &self.tmp_dir.display().to_string());
        out.key_value("Mode", self.mode.as_str());
    }
}
