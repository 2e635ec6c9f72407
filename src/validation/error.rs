use miette::Diagnostic;
use std::sync::Arc;
use thiserror::Error;

use crate::protocol::DecodeError;

/// Why one directory or file failed validation
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ValidationError {
    #[error("failed to read {path}")]
    #[diagnostic(code(librarian::io))]
    Io {
        path: String,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error("unsupported {kind} version '{version}'")]
    #[diagnostic(
        code(librarian::unsupported_version),
        help("only version 0.1.0 is supported")
    )]
    UnsupportedVersion { kind: String, version: String },

    #[error("unsupported training format '{format}'")]
    #[diagnostic(code(librarian::unsupported_format), help("only the dsu format is supported"))]
    UnsupportedFormat { format: String },

    #[error("mismatched definition: expected '{expected}' but got '{actual}'")]
    #[diagnostic(code(librarian::mismatched_definition))]
    MismatchedDefinition { expected: String, actual: String },

    #[error("mismatched tomegg definition: expected '{expected}' but got '{actual}'")]
    #[diagnostic(code(librarian::mismatched_tomegg_definition))]
    MismatchedTomeggDefinition { expected: String, actual: String },

    #[error(
        "mismatched definition for dimension '{dimension}': expected '{expected}' but got '{actual}'"
    )]
    #[diagnostic(code(librarian::mismatched_dimension_definition))]
    MismatchedDimensionDefinition {
        dimension: String,
        expected: String,
        actual: String,
    },

    #[error("no dimension specified for evaluation")]
    #[diagnostic(code(librarian::no_dimension), help("declare dimensions under meta.dimensions"))]
    NoDimension,

    #[error("no measurements found for evaluation {id}")]
    #[diagnostic(code(librarian::no_measurements))]
    NoMeasurements { id: String },

    #[error("required field {field} for content entry {id}")]
    #[diagnostic(code(librarian::required_field))]
    RequiredField { id: String, field: String },

    #[error("specified training {id} was not found")]
    #[diagnostic(
        code(librarian::training_not_found),
        help("an evaluation must reference a DSU entry that exists and is itself valid")
    )]
    TrainingNotFound { id: String },
}

impl ValidationError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn required_field(id: &str, field: &str) -> Self {
        Self::RequiredField {
            id: id.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn training_not_found(id: &str) -> Self {
        Self::TrainingNotFound { id: id.to_string() }
    }
}

/// A non-fatal finding; logged and reported, never fails a run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("dimension '{dimension}' not registered for evaluation {id}")]
    UnregisteredDimension { id: String, dimension: String },

    #[error("empty training set in {file}")]
    EmptyTrainingSet { file: String },

    #[error("empty evaluations set in {file}")]
    EmptyEvaluationSet { file: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Directory,
    File,
}

/// A [`ValidationError`] together with the entity it was recorded against
#[derive(Error, Debug, Clone)]
#[error("{path}: {error}")]
pub struct EntityError {
    pub path: String,
    pub entity: EntityKind,
    pub error: ValidationError,
}
