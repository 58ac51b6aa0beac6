use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile};

use super::PAGES_DIR;

/// `src/pages/<name>.module.less`, a single rule colouring the page title.
pub struct PageStyle {
    name: String,
    color: String,
}

impl PageStyle {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

impl GeneratedFile for PageStyle {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(PAGES_DIR)
            .join(format!("{}.module.less", self.name))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        format!(".title {{\n  color: {};\n}}\n", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        insta::assert_snapshot!(PageStyle::new("about", "#1a2b3c").render(), @r"
        .title {
          color: #1a2b3c;
        }
        ");
    }
}
