//! Page component generator.

use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile, capitalize};

use super::PAGES_DIR;

/// `src/pages/<name>.tsx`
pub struct PageTsx {
    name: String,
}

impl PageTsx {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Last segment of the page name, used for the file stem.
    fn stem(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Name of the exported React component.
    pub fn component_name(&self) -> String {
        capitalize(self.stem())
    }
}

impl GeneratedFile for PageTsx {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(PAGES_DIR).join(format!("{}.tsx", self.name))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        format!(
            r#"import styles from './{stem}.module.less';

export default function {component}() {{
  return (
    <div>
      <h1 className={{styles.title}}>Page {name}</h1>
    </div>
  );
}}
"#,
            stem = self.stem(),
            component = self.component_name(),
            name = self.name,
        )
    }
}
