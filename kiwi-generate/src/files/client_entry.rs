use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile};

use super::confirm_rules;

/// Project-relative path of the user-owned client entry.
pub const CLIENT_ENTRY: &str = "src/client.tsx";

/// `src/client.tsx`, a copy of the framework entry template.
pub struct ClientEntry {
    content: String,
}

impl ClientEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl GeneratedFile for ClientEntry {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CLIENT_ENTRY)
    }

    fn rules(&self) -> FileRules {
        confirm_rules(CLIENT_ENTRY)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
