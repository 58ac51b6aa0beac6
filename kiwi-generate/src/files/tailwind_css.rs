use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile};

use super::confirm_rules;

/// `src/tailwind.css` pulling in the tailwind layers.
pub struct TailwindCss;

impl GeneratedFile for TailwindCss {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("tailwind.css")
    }

    fn rules(&self) -> FileRules {
        confirm_rules("src/tailwind.css")
    }

    fn render(&self) -> String {
        "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n".to_string()
    }
}
