use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A document that could not be decoded
///
/// Only the one document is affected; the rest of the run continues.
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("failed to decode {path}: {message}")]
#[diagnostic(code(librarian::decode))]
pub struct DecodeError {
    pub path: String,
    pub message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: Option<SourceSpan>,
}

impl DecodeError {
    pub fn new(path: &str, content: &str, span: Option<SourceSpan>, message: String) -> Self {
        Self {
            path: path.to_string(),
            message,
            src: crate::error_utils::create_named_source(
                std::path::Path::new(path),
                content.to_string(),
            ),
            span,
        }
    }

    pub(crate) fn from_yaml(path: &str, content: &str, error: &serde_yaml::Error) -> Self {
        let span = error
            .location()
            .map(|location| SourceSpan::new(location.index().into(), 1));
        Self::new(path, content, span, error.to_string())
    }

    pub fn span(&self) -> Option<SourceSpan> {
        self.span
    }
}
