//! Pluggable validators and the registry that drives them over a plan

mod error;
mod evaluation;
mod registry;
mod training;


pub use error::{EntityError, EntityKind, ValidationError, Warning};
pub use evaluation::EvaluationValidator;
pub use registry::{Registry, ValidationOutcome, validate_plan};
pub use training::DsuTrainingValidator;

use crate::plan::ValidationContext;
use crate::tree::{Directory, File};

/// The validation operations every validator provides
pub trait Validator {
    /// Short name used in log fields
    fn name(&self) -> &'static str;

    /// Validate a single directory
    fn validate_directory(
        &self,
        directory: &Directory,
        ctx: &mut ValidationContext,
    ) -> Result<(), ValidationError>;

    /// Validate a single file
    fn validate_file(&self, file: &File, ctx: &mut ValidationContext)
    -> Result<(), ValidationError>;
}

/// Read a document, mapping I/O failures onto [`ValidationError::Io`]
fn read_document(path: &str) -> Result<String, ValidationError> {
    std::fs::read_to_string(path).map_err(|err| ValidationError::io(path, err))
}
