//! tailwind.config.js generator.

use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile};

use super::confirm_rules;

/// The tailwindcss configuration at the project root.
pub struct TailwindConfig;

impl GeneratedFile for TailwindConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tailwind.config.js")
    }

    fn rules(&self) -> FileRules {
        confirm_rules("tailwind.config.js")
    }

    fn render(&self) -> String {
        r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    './src/pages/**/*.tsx',
    './src/components/**/*.tsx',
    './src/layouts/**/*.tsx',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#
        .to_string()
    }
}
