use eyre::{Context, Result};
use kiwi_config::Config;
use kiwi_core::{FileOperationResult, GeneratedFile};

use super::{GenerateContext, GenerateRequest};
use crate::{
    GenerateError,
    files::{CLIENT_ENTRY, ClientEntry},
    imports::rewrite_imports,
    sync::{Mode, SyncOptions, tmp_dir},
};

/// Copy the framework entry template to `src/client.tsx` and point
/// `clientEntry` at it.
///
/// The temp directory is synchronized first when it does not exist yet.
pub(super) fn generate(
    request: &GenerateRequest,
    normalized: &Config,
    ctx: &mut GenerateContext<'_>,
) -> Result<Vec<FileOperationResult>> {
    let cwd = request.cwd.as_path();
    let tmp = tmp_dir(cwd);
    let template = tmp.join("client.tsx");

    if !tmp.exists() {
        ctx.sync
            .sync(&SyncOptions {
                config: normalized,
                cwd,
                tmp_dir: &tmp,
                mode: Mode::Development,
            })
            .wrap_err("Failed to synchronize framework files")?;
    }
    if !template.exists() {
        return Err(GenerateError::TemplateMissing { path: template }.into());
    }

    let content = std::fs::read_to_string(&template)
        .wrap_err_with(|| format!("Failed to read {}", template.display()))?;
    let entry = ClientEntry::new(rewrite_imports(
        &content,
        &template,
        &cwd.join(CLIENT_ENTRY),
    ));

    let written = entry.write(cwd, ctx.prompter);
    if !written.is_success() {
        return Ok(vec![written]);
    }

    let mut config = request.config.clone();
    config.client_entry = Some(CLIENT_ENTRY.to_string());
    let update = config.save(cwd);

    tracing::info!(template = %template.display(), "client entry generated");
    Ok(vec![written, update])
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use kiwi_core::{WriteStatus, testing::ScriptedPrompter};
    use tempfile::TempDir;

    use super::*;
    use crate::testing::{FixedColor, RecordingSync};

    fn run(
        cwd: &Path,
        sync: &RecordingSync,
        prompter: &ScriptedPrompter,
    ) -> Result<Vec<FileOperationResult>> {
        let request = GenerateRequest {
            cwd: cwd.to_path_buf(),
            kind: Some("entry".into()),
            name: None,
            config: Config::default(),
        };
        let normalized = request.config.normalized();
        let mut colors = FixedColor::default();
        generate(
            &request,
            &normalized,
            &mut GenerateContext {
                prompter,
                colors: &mut colors,
                sync,
            },
        )
    }

    #[test]
    fn test_syncs_once_then_copies_template() {
        let temp = TempDir::new().unwrap();
        let sync = RecordingSync::materializing();

        let results = run(temp.path(), &sync, &ScriptedPrompter::new()).unwrap();

        let calls = sync.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].mode, Mode::Development);
        assert_eq!(calls[0].tmp_dir, temp.path().join("src/.kiwi"));

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_success()));

        let entry = fs::read_to_string(temp.path().join("src/client.tsx")).unwrap();
        assert!(entry.contains("from './.kiwi/core/routes'"));
        assert!(entry.contains("from 'kiwi/client'"));

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.client_entry.as_deref(), Some("src/client.tsx"));
    }

    #[test]
    fn test_existing_tmp_dir_skips_sync() {
        let temp = TempDir::new().unwrap();
        let tmp = temp.path().join("src/.kiwi");
        fs::create_dir_all(&tmp).unwrap();
        fs::write(tmp.join("client.tsx"), "import x from '../x';\n").unwrap();
        let sync = RecordingSync::materializing();

        run(temp.path(), &sync, &ScriptedPrompter::new()).unwrap();

        assert!(sync.calls().is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join("src/client.tsx")).unwrap(),
            "import x from './x';\n"
        );
    }

    #[test]
    fn test_missing_template_after_sync_fails() {
        let temp = TempDir::new().unwrap();
        let sync = RecordingSync::empty();

        let err = run(temp.path(), &sync, &ScriptedPrompter::new()).unwrap_err();

        assert_eq!(sync.calls().len(), 1);
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::TemplateMissing { .. })
        ));
        assert!(!temp.path().join("src/client.tsx").exists());
        assert!(!temp.path().join(".kiwirc.ts").exists());
    }

    #[test]
    fn test_declined_overwrite_keeps_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/client.tsx"), "// mine").unwrap();
        let sync = RecordingSync::materializing();
        let prompter = ScriptedPrompter::new().answer("src/client.tsx", false);

        let results = run(temp.path(), &sync, &prompter).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, WriteStatus::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("src/client.tsx")).unwrap(),
            "// mine"
        );
        assert!(!temp.path().join(".kiwirc.ts").exists());
    }
}
