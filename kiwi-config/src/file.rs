use std::path::{Path, PathBuf};

use kiwi_core::FileOperationResult;

use crate::{Config, Error, Result, literal};

/// Name of the configuration module at the project root.
pub const CONFIG_FILE: &str = ".kiwirc.ts";

/// Location of the configuration module for a project.
pub fn config_path(cwd: &Path) -> PathBuf {
    cwd.join(CONFIG_FILE)
}

impl Config {
    /// Load the configuration for the project at `cwd`.
    ///
    /// A missing file yields an empty configuration.
    pub fn load(cwd: &Path) -> Result<Self> {
        let path = config_path(cwd);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_literal(&content, &filename)
    }

    /// Parse a configuration module's source.
    pub fn from_literal(src: &str, filename: &str) -> Result<Self> {
        let map = literal::parse_literal(src, filename)?;
        Self::from_map(map).map_err(|e| Error::invalid(e, filename))
    }

    /// Render the configuration as a module source.
    pub fn to_literal(&self) -> String {
        literal::to_literal(&self.to_map())
    }

    /// Write the configuration to `.kiwirc.ts`, replacing whatever is there.
    ///
    /// Never asks for confirmation. I/O errors come back as a failed result.
    pub fn save(&self, cwd: &Path) -> FileOperationResult {
        let path = config_path(cwd);
        match std::fs::write(&path, self.to_literal()) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "configuration saved");
                FileOperationResult::written(&path, format!("Updated {}", CONFIG_FILE))
            }
            Err(e) => FileOperationResult::failed(
                &path,
                format!("Failed to update {}: {}", CONFIG_FILE, e),
            ),
        }
    }
}
