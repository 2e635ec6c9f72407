use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TreeError {
    /// The file-system walk reported an error for an entry
    #[error("failed to traverse {path}")]
    #[diagnostic(
        code(librarian::traversal),
        help("check that the directory exists and is readable")
    )]
    Traversal {
        path: String,
        #[source]
        source: walkdir::Error,
    },
}
