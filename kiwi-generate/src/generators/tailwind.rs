use std::path::Path;

use eyre::{Context, Result};
use kiwi_core::{FileOperationResult, GeneratedFile};

use super::{GenerateContext, GenerateRequest};
use crate::files::{TailwindConfig, TailwindCss};

/// Write the tailwind config and stylesheet, then switch the flag on.
///
/// Both writes run concurrently and each asks on its own before replacing an
/// existing file. The configuration is updated whatever their outcome.
pub(super) fn generate(
    request: &GenerateRequest,
    ctx: &mut GenerateContext<'_>,
) -> Result<Vec<FileOperationResult>> {
    let cwd = request.cwd.as_path();
    let src = cwd.join("src");
    std::fs::create_dir_all(&src).wrap_err_with(|| format!("Failed to create {}", src.display()))?;

    let prompter = ctx.prompter;
    let (config_file, stylesheet) = std::thread::scope(|s| {
        let config_file = s.spawn(|| TailwindConfig.write(cwd, prompter));
        let stylesheet = s.spawn(|| TailwindCss.write(cwd, prompter));
        (
            joined(config_file.join(), &TailwindConfig, cwd),
            joined(stylesheet.join(), &TailwindCss, cwd),
        )
    });

    let mut config = request.config.clone();
    config.tailwindcss = Some(true);
    let update = config.save(cwd);

    tracing::info!(
        config_file = ?config_file.status,
        stylesheet = ?stylesheet.status,
        "tailwindcss generated"
    );
    Ok(vec![config_file, stylesheet, update])
}

fn joined(
    outcome: std::thread::Result<FileOperationResult>,
    file: &dyn GeneratedFile,
    cwd: &Path,
) -> FileOperationResult {
    outcome.unwrap_or_else(|_| {
        let path = file.path(cwd);
        let message = format!("Failed to write {}: writer panicked", path.display());
        FileOperationResult::failed(path, message)
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use kiwi_config::Config;
    use kiwi_core::{WriteStatus, testing::ScriptedPrompter};
    use tempfile::TempDir;

    use super::*;
    use crate::testing::{FixedColor, RecordingSync};

    fn run(cwd: &Path, config: Config, prompter: &ScriptedPrompter) -> Vec<FileOperationResult> {
        let request = GenerateRequest {
            cwd: cwd.to_path_buf(),
            kind: Some("tailwindcss".into()),
            name: None,
            config,
        };
        let mut colors = FixedColor::default();
        let sync = RecordingSync::empty();
        generate(
            &request,
            &mut GenerateContext {
                prompter,
                colors: &mut colors,
                sync: &sync,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_project() {
        let temp = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new();

        let results = run(temp.path(), Config::default(), &prompter);

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.is_success()));
        assert!(prompter.asked().is_empty());
        assert!(
            fs::read_to_string(temp.path().join("tailwind.config.js"))
                .unwrap()
                .contains("module.exports")
        );
        assert!(
            fs::read_to_string(temp.path().join("src/tailwind.css"))
                .unwrap()
                .starts_with("@tailwind base;")
        );
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.tailwindcss, Some(true));
    }

    #[test]
    fn test_declined_overwrite_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tailwind.config.js"), "// mine").unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/tailwind.css"), "/* mine */").unwrap();
        let prompter = ScriptedPrompter::new()
            .answer("tailwind.config.js", false)
            .answer("src/tailwind.css", true);

        let results = run(temp.path(), Config::default(), &prompter);

        assert_eq!(results[0].status, WriteStatus::Skipped);
        assert_eq!(results[1].status, WriteStatus::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap(),
            "// mine"
        );
        assert!(
            fs::read_to_string(temp.path().join("src/tailwind.css"))
                .unwrap()
                .contains("@tailwind utilities;")
        );
        let mut asked = prompter.asked();
        asked.sort();
        assert_eq!(
            asked,
            vec![
                "src/tailwind.css already exists, overwrite it?",
                "tailwind.config.js already exists, overwrite it?",
            ]
        );
        // The flag is set even though one write was skipped.
        assert!(Config::load(temp.path()).unwrap().tailwind_enabled());
    }

    #[test]
    fn test_keeps_other_settings() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.client_entry = Some("src/client.tsx".into());
        config.extra.insert("title".into(), "demo".into());

        run(temp.path(), config, &ScriptedPrompter::new());

        let saved = Config::load(temp.path()).unwrap();
        assert_eq!(saved.client_entry.as_deref(), Some("src/client.tsx"));
        assert_eq!(saved.extra["title"], "demo");
        assert_eq!(saved.tailwindcss, Some(true));
    }

    #[test]
    fn test_failed_write_still_enables_flag() {
        let temp = TempDir::new().unwrap();
        // A directory where the stylesheet should go cannot be written over.
        fs::create_dir_all(temp.path().join("src/tailwind.css")).unwrap();

        let results = run(temp.path(), Config::default(), &ScriptedPrompter::new());

        assert_eq!(results[0].status, WriteStatus::Written);
        assert_eq!(results[1].status, WriteStatus::Failed);
        assert!(results[1].message.starts_with("Failed to write"));
        assert_eq!(results[2].status, WriteStatus::Written);
        assert!(Config::load(temp.path()).unwrap().tailwind_enabled());
    }
}
