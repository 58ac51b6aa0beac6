use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile};

use crate::sync::Mode;

/// `<tmp>/core/plugins.ts`
pub struct PluginsTs {
    mode: Mode,
}

impl PluginsTs {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }
}

impl GeneratedFile for PluginsTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("core").join("plugins.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        format!(
            "export const mode = '{}';\n\nexport const plugins = [];\n",
            self.mode
        )
    }
}
