use std::path::{Component, Path};

use eyre::Result;
use kiwi_core::{FileOperationResult, GeneratedFile};

use super::{GenerateContext, GenerateRequest};
use crate::{
    GenerateError,
    files::{PageStyle, PageTsx},
};

/// Write `src/pages/<name>.tsx` and its style module.
///
/// Refuses to run when either file already exists; nothing is written then.
pub(super) fn generate(
    request: &GenerateRequest,
    ctx: &mut GenerateContext<'_>,
) -> Result<Vec<FileOperationResult>> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(GenerateError::MissingName)?;
    validate_name(name)?;

    let component = PageTsx::new(name);
    let style = PageStyle::new(name, ctx.colors.hex_color());

    for path in [component.path(&request.cwd), style.path(&request.cwd)] {
        if path.exists() {
            return Err(GenerateError::PageExists { path }.into());
        }
    }

    let results = vec![
        component.write(&request.cwd, ctx.prompter),
        style.write(&request.cwd, ctx.prompter),
    ];
    tracing::info!(page = name, component = %component.component_name(), "page generated");
    Ok(results)
}

/// Page names are relative paths below `src/pages` ending in a file stem.
fn validate_name(name: &str) -> Result<(), GenerateError> {
    let below_pages = Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    let has_stem = name.rsplit('/').next().is_some_and(|stem| !stem.is_empty());

    if below_pages && has_stem {
        Ok(())
    } else {
        Err(GenerateError::InvalidName {
            name: name.to_string(),
        })
    }
}
