//! Framework entry template, materialized into the temp directory.

use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile};

/// `<tmp>/client.tsx`
pub struct ClientTemplate {
    tailwind: bool,
}

impl ClientTemplate {
    pub fn new(tailwind: bool) -> Self {
        Self { tailwind }
    }
}

impl GeneratedFile for ClientTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("client.tsx")
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let mut out = String::from(
            "import { renderClient } from 'kiwi/client';\n\
             import { routes } from './core/routes';\n\
             import { plugins, mode } from './core/plugins';\n",
        );
        if self.tailwind {
            out.push_str("import '../tailwind.css';\n");
        }
        out.push_str(
            "\nrenderClient({\n  \
             rootElement: document.getElementById('root'),\n  \
             routes,\n  \
             plugins,\n  \
             mode,\n\
             });\n",
        );
        out
    }
}
