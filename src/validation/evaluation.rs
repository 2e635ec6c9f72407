use tracing::{debug, error, info};

use super::{ValidationError, Validator, Warning, read_document};
use crate::plan::ValidationContext;
use crate::protocol::{
    EVALUATIONS_TYPE, EvaluationDocument, EvaluationRecord, SUPPORTED_VERSION,
    dimension_definition, tomegg_definition,
};
use crate::tree::{Directory, File};

/// Validates evaluation documents against previously registered training
#[derive(Debug, Default)]
pub struct EvaluationValidator;

impl EvaluationValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_document(
        &self,
        path: &str,
        document: &EvaluationDocument,
        ctx: &mut ValidationContext,
    ) -> Result<(), ValidationError> {
        let tomegg = &document.tomegg;

        if tomegg.version != SUPPORTED_VERSION {
            return Err(ValidationError::UnsupportedVersion {
                kind: EVALUATIONS_TYPE.to_string(),
                version: tomegg.version.clone(),
            });
        }

        let expected = tomegg_definition(&tomegg.kind, &tomegg.version);
        if tomegg.definition != expected {
            let err = ValidationError::MismatchedTomeggDefinition {
                expected,
                actual: tomegg.definition.clone(),
            };
            error!(validator = "evaluation", file = path, "{err}");
            return Err(err);
        }

        if document.meta.dimensions.is_empty() {
            return Err(ValidationError::NoDimension);
        }

        for dimension in &document.meta.dimensions {
            let expected = dimension_definition(&dimension.name, &dimension.version);
            if dimension.definition != expected {
                let err = ValidationError::MismatchedDimensionDefinition {
                    dimension: dimension.name.clone(),
                    expected,
                    actual: dimension.definition.clone(),
                };
                error!(validator = "evaluation", file = path, "{err}");
                return Err(err);
            }
            ctx.register_dimension(&dimension.name);
            ctx.register_dimension(&dimension.alias);
        }

        if document.evaluations.is_empty() {
            ctx.warn(Warning::EmptyEvaluationSet {
                file: path.to_string(),
            });
        }

        for record in &document.evaluations {
            validate_record(record, ctx)?;
        }

        Ok(())
    }
}

fn validate_record(
    record: &EvaluationRecord,
    ctx: &mut ValidationContext,
) -> Result<(), ValidationError> {
    let id = record.id.as_str();
    if id.trim().is_empty() {
        return Err(ValidationError::required_field(id, "id"));
    }

    if !ctx.is_registered(id) {
        return Err(ValidationError::training_not_found(id));
    }

    // Registered but failed its own validation
    if !ctx.is_valid(id) {
        return Err(ValidationError::training_not_found(id));
    }

    if record.measurements.is_empty() {
        let err = ValidationError::NoMeasurements { id: id.to_string() };
        error!(validator = "evaluation", id, "{err}");
        return Err(err);
    }

    for measure in &record.measurements {
        if measure.dimension.trim().is_empty() {
            return Err(ValidationError::required_field(id, "dimension"));
        }

        if measure.score.is_none() {
            return Err(ValidationError::required_field(id, "score"));
        }

        // Dimension registration documents intent; it is not a closed set
        if !ctx.is_known_dimension(&measure.dimension) {
            ctx.warn(Warning::UnregisteredDimension {
                id: id.to_string(),
                dimension: measure.dimension.clone(),
            });
        }
    }

    Ok(())
}

impl Validator for EvaluationValidator {
    fn name(&self) -> &'static str {
        "evaluation"
    }

    fn validate_directory(
        &self,
        directory: &Directory,
        _ctx: &mut ValidationContext,
    ) -> Result<(), ValidationError> {
        if directory.path().contains(EVALUATIONS_TYPE) {
            debug!(validator = "evaluation", dir = directory.path(), "evaluations directory");
        }
        Ok(())
    }

    fn validate_file(
        &self,
        file: &File,
        ctx: &mut ValidationContext,
    ) -> Result<(), ValidationError> {
        let path = file.filepath();
        if !path.contains(EVALUATIONS_TYPE) {
            return Ok(());
        }

        let content = read_document(path)?;
        let document = EvaluationDocument::from_yaml(path, &content)?;

        if document.tomegg.kind != EVALUATIONS_TYPE {
            return Ok(());
        }

        self.validate_document(path, &document, ctx)?;

        info!(validator = "evaluation", file = path, "ok");
        Ok(())
    }
}
