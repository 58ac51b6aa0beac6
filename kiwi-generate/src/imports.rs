//! Import specifier rewriting for templates copied between directories.

use std::{path::Path, sync::LazyLock};

use kiwi_core::{normalize_path, relative_path, to_slash};
use regex::{Captures, Regex};

/// `from "x"`, `import "x"` and `import("x")`, in either quote style.
static SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<lead>\bfrom\s*|\bimport\s*\(?\s*)(?:"(?P<dq>[^"\n]*)"|'(?P<sq>[^'\n]*)')"#)
        .expect("valid specifier pattern")
});

/// Whether an import specifier points at a file relative to the importer.
pub fn is_relative_specifier(spec: &str) -> bool {
    spec == "." || spec == ".." || spec.starts_with("./") || spec.starts_with("../")
}

/// Rewrite relative imports in `content` so they still resolve to the same
/// files once the text moves from `from_file` to `to_file`.
///
/// Package imports are left as they are, and so is anything on a line
/// comment or inside a block comment. Text in JSX that happens to read like
/// `from './x'` is still rewritten.
pub fn rewrite_imports(content: &str, from_file: &Path, to_file: &Path) -> String {
    let from_dir = from_file.parent().unwrap_or(Path::new(""));
    let to_dir = to_file.parent().unwrap_or(Path::new(""));

    SPECIFIER
        .replace_all(content, |caps: &Captures<'_>| {
            if in_comment(content, caps.get(0).map_or(0, |m| m.start())) {
                return caps[0].to_string();
            }
            let (spec, quote) = match (caps.name("dq"), caps.name("sq")) {
                (Some(m), _) => (m.as_str(), '"'),
                (None, Some(m)) => (m.as_str(), '\''),
                (None, None) => return caps[0].to_string(),
            };

            let spec = if is_relative_specifier(spec) {
                rebase(spec, from_dir, to_dir)
            } else {
                spec.to_string()
            };
            format!("{}{quote}{spec}{quote}", &caps["lead"])
        })
        .into_owned()
}

fn in_comment(content: &str, at: usize) -> bool {
    let before = &content[..at];
    let line = &before[before.rfind('\n').map_or(0, |i| i + 1)..];
    if line.contains("//") {
        return true;
    }
    matches!(
        (before.rfind("/*"), before.rfind("*/")),
        (Some(open), close) if close.is_none_or(|close| close < open)
    )
}

fn rebase(spec: &str, from_dir: &Path, to_dir: &Path) -> String {
    let target = normalize_path(&from_dir.join(spec));
    let mut rebased = to_slash(&relative_path(to_dir, &target));

    if rebased.is_empty() {
        rebased.push('.');
    } else if rebased != ".." && !rebased.starts_with("../") {
        rebased.insert_str(0, "./");
    }
    if spec.ends_with('/') && !rebased.ends_with('/') {
        rebased.push('/');
    }
    rebased
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const TEMPLATE: &str = r#"import React from 'react';
import { renderClient } from "kiwi/client";
import { routes } from './core/routes';
import type { Plugin } from "./core/plugins";
import '../tailwind.css';
export { helper } from "../../shared/helper";
const lazy = () => import("./pages/lazy");
"#;

    fn paths() -> (PathBuf, PathBuf) {
        (
            PathBuf::from("/project/src/.kiwi/client.tsx"),
            PathBuf::from("/project/src/client.tsx"),
        )
    }

    #[test]
    fn test_rewrites_relative_imports() {
        let (from, to) = paths();
        let out = rewrite_imports(TEMPLATE, &from, &to);

        assert!(out.contains("import { routes } from './.kiwi/core/routes';"));
        assert!(out.contains("import type { Plugin } from \"./.kiwi/core/plugins\";"));
        assert!(out.contains("import './tailwind.css';"));
        assert!(out.contains("export { helper } from \"../shared/helper\";"));
        assert!(out.contains("import(\"./.kiwi/pages/lazy\")"));
    }

    #[test]
    fn test_package_imports_untouched() {
        let (from, to) = paths();
        let out = rewrite_imports(TEMPLATE, &from, &to);

        assert!(out.contains("import React from 'react';"));
        assert!(out.contains("import { renderClient } from \"kiwi/client\";"));
    }

    #[test]
    fn test_rewritten_imports_resolve_to_same_file() {
        let (from, to) = paths();
        let out = rewrite_imports(TEMPLATE, &from, &to);

        let originals: Vec<_> = SPECIFIER
            .captures_iter(TEMPLATE)
            .map(|c| c.name("dq").or(c.name("sq")).unwrap().as_str().to_string())
            .collect();
        let rewritten: Vec<_> = SPECIFIER
            .captures_iter(&out)
            .map(|c| c.name("dq").or(c.name("sq")).unwrap().as_str().to_string())
            .collect();
        assert_eq!(originals.len(), rewritten.len());

        for (original, new) in originals.iter().zip(&rewritten) {
            if is_relative_specifier(original) {
                assert_eq!(
                    normalize_path(&from.parent().unwrap().join(original)),
                    normalize_path(&to.parent().unwrap().join(new)),
                    "{original} -> {new}"
                );
            } else {
                assert_eq!(original, new);
            }
        }
    }

    #[test]
    fn test_idempotent_for_same_destination() {
        let (from, to) = paths();
        let once = rewrite_imports(TEMPLATE, &from, &to);
        let twice = rewrite_imports(&once, &to, &to);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_same_directory_is_identity_for_canonical_paths() {
        let src = "import a from './a';\nimport b from '../b/';\n";
        let file = Path::new("/p/src/x.ts");
        assert_eq!(rewrite_imports(src, file, file), src);
    }

    #[test]
    fn test_rebase_edge_cases() {
        let from = Path::new("/p/src/.kiwi");
        assert_eq!(rebase(".", from, from), ".");
        assert_eq!(rebase("..", from, Path::new("/p/src")), ".");
        assert_eq!(rebase("./", from, Path::new("/p/src")), "./.kiwi/");
        assert_eq!(rebase("./a/../b", from, from), "./b");
        assert_eq!(rebase("../x", from, Path::new("/p/src/deep/er")), "../../x");
    }

    #[test]
    fn test_identifiers_containing_from_are_ignored() {
        let src = "const datefrom = 'x';\nimport y from './y';\n";
        let out = rewrite_imports(src, Path::new("/p/a/f.ts"), Path::new("/p/f.ts"));
        assert_eq!(out, "const datefrom = 'x';\nimport y from './a/y';\n");
    }

    #[test]
    fn test_comments_are_left_alone() {
        let src = "// loaded from './x'\n/* import './y' */\nimport z from './z'; // from './w'\n";
        let out = rewrite_imports(src, Path::new("/p/a/f.ts"), Path::new("/p/f.ts"));
        assert_eq!(
            out,
            "// loaded from './x'\n/* import './y' */\nimport z from './a/z'; // from './w'\n"
        );
    }
}
