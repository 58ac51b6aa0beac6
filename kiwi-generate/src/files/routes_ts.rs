use std::path::{Path, PathBuf};

use kiwi_core::{FileRules, GeneratedFile};

/// `<tmp>/core/routes.ts`, one lazily loaded route per page.
pub struct RoutesTs {
    pages: Vec<String>,
}

impl RoutesTs {
    /// `pages` are file stems under `src/pages`.
    pub fn new(mut pages: Vec<String>) -> Self {
        pages.sort();
        Self { pages }
    }

    fn route_path(page: &str) -> String {
        if page == "index" {
            "/".to_string()
        } else {
            format!("/{}", page)
        }
    }
}

impl GeneratedFile for RoutesTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("core").join("routes.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let mut out = String::from("export const routes = [\n");
        for page in &self.pages {
            out.push_str(&format!(
                "  {{ path: '{}', component: () => import('../../pages/{}') }},\n",
                Self::route_path(page),
                page
            ));
        }
        out.push_str("];\n");
        out
    }
}
