use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for kiwi-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing `export default` in {filename}")]
    #[diagnostic(
        code(kiwi::missing_export),
        help("the configuration must be written as `export default {{ ... }};`")
    )]
    MissingExport {
        #[source_code]
        src: NamedSource<String>,
        filename: String,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(kiwi::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting in {filename}")]
    #[diagnostic(
        code(kiwi::invalid_setting),
        help("`clientEntry` must be a string and `tailwindcss` a boolean")
    )]
    Invalid {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration must be an object literal")]
    #[diagnostic(code(kiwi::not_an_object))]
    NotAnObject {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `{{`")]
        span: Option<SourceSpan>,
    },
}

impl Error {
    /// Create a missing-export error with source context
    pub fn missing_export(src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::MissingExport {
            src: NamedSource::new(filename, src.to_string()),
            filename: filename.to_string(),
        })
    }

    /// Create a parse error with source context
    pub fn parse(
        source: serde_json::Error,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an invalid-setting error
    pub fn invalid(source: serde_json::Error, filename: &str) -> Box<Self> {
        Box::new(Error::Invalid {
            filename: filename.to_string(),
            source,
        })
    }

    /// Create a not-an-object error pointing at `offset`
    pub fn not_an_object(src: &str, filename: &str, offset: Option<usize>) -> Box<Self> {
        Box::new(Error::NotAnObject {
            src: NamedSource::new(filename, src.to_string()),
            span: offset.map(|o| SourceSpan::from((o, 1))),
        })
    }
}
