//! Deterministic collaborators for generator tests.

use std::path::PathBuf;

use eyre::Result;
use parking_lot::Mutex;

use crate::{
    ColorSource,
    sync::{Mode, SyncOptions, Synchronizer, TemplateSync},
};

/// Always returns the same color.
pub struct FixedColor(String);

impl FixedColor {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }
}

impl Default for FixedColor {
    fn default() -> Self {
        Self::new("#000000")
    }
}

impl ColorSource for FixedColor {
    fn hex_color(&mut self) -> String {
        self.0.clone()
    }
}

/// Arguments of one recorded synchronization.
#[derive(Debug, Clone)]
pub struct SyncCall {
    pub tmp_dir: PathBuf,
    pub mode: Mode,
    pub client_entry: Option<String>,
}

/// Records every call, optionally delegating to [`TemplateSync`].
pub struct RecordingSync {
    materialize: bool,
    calls: Mutex<Vec<SyncCall>>,
}

impl RecordingSync {
    /// Records calls and writes the real templates.
    pub fn materializing() -> Self {
        Self {
            materialize: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Records calls and writes nothing.
    pub fn empty() -> Self {
        Self {
            materialize: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SyncCall> {
        self.calls.lock().clone()
    }
}

impl Synchronizer for RecordingSync {
    fn sync(&self, opts: &SyncOptions<'_>) -> Result<()> {
        self.calls.lock().push(SyncCall {
            tmp_dir: opts.tmp_dir.to_path_buf(),
            mode: opts.mode,
            client_entry: opts.config.client_entry.clone(),
        });
        if self.materialize {
            TemplateSync.sync(opts)?;
        }
        Ok(())
    }
}
