use tracing::{debug, info};

use super::{ValidationError, Validator, Warning, read_document};
use crate::plan::ValidationContext;
use crate::protocol::{
    DSU_FORMAT, DsuEntry, SUPPORTED_VERSION, TRAINING_TYPE, TrainingDocument, format_definition,
    tomegg_definition,
};
use crate::tree::{Directory, File};

/// Validates daily standup training documents and registers their ids
#[derive(Debug, Default)]
pub struct DsuTrainingValidator;

impl DsuTrainingValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_document(
        &self,
        path: &str,
        document: &TrainingDocument,
        ctx: &mut ValidationContext,
    ) -> Result<(), ValidationError> {
        let tomegg = &document.tomegg;
        let format = &document.meta.format;

        if tomegg.version != SUPPORTED_VERSION {
            return Err(ValidationError::UnsupportedVersion {
                kind: TRAINING_TYPE.to_string(),
                version: tomegg.version.clone(),
            });
        }

        if format.kind != DSU_FORMAT {
            return Err(ValidationError::UnsupportedFormat {
                format: format.kind.clone(),
            });
        }

        if format.version != SUPPORTED_VERSION {
            return Err(ValidationError::UnsupportedVersion {
                kind: format!("{DSU_FORMAT} format"),
                version: format.version.clone(),
            });
        }

        let expected = tomegg_definition(&tomegg.kind, &tomegg.version);
        if tomegg.definition != expected {
            return Err(ValidationError::MismatchedDefinition {
                expected,
                actual: tomegg.definition.clone(),
            });
        }

        let expected = format_definition(&format.kind, &format.version);
        if format.definition != expected {
            return Err(ValidationError::MismatchedDefinition {
                expected,
                actual: format.definition.clone(),
            });
        }

        if document.content.is_empty() {
            ctx.warn(Warning::EmptyTrainingSet {
                file: path.to_string(),
            });
        }

        for entry in &document.content {
            ctx.register_training(&entry.id);
            debug!(training = %entry.id, "registered training");

            validate_entry(entry)?;
            ctx.mark_valid(&entry.id);
        }

        Ok(())
    }
}

/// Checks required fields; the first blank one fails the entry
fn validate_entry(entry: &DsuEntry) -> Result<(), ValidationError> {
    let required = [
        ("doing_today", &entry.doing_today),
        ("done_yesterday", &entry.done_yesterday),
        ("datetime", &entry.datetime_raw),
        ("id", &entry.id),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::required_field(&entry.id, field));
        }
    }
    Ok(())
}

impl Validator for DsuTrainingValidator {
    fn name(&self) -> &'static str {
        "training"
    }

    fn validate_directory(
        &self,
        directory: &Directory,
        _ctx: &mut ValidationContext,
    ) -> Result<(), ValidationError> {
        if directory.path().contains(TRAINING_TYPE) {
            debug!(validator = "training", dir = directory.path(), "training directory");
        }
        Ok(())
    }

    fn validate_file(
        &self,
        file: &File,
        ctx: &mut ValidationContext,
    ) -> Result<(), ValidationError> {
        let path = file.filepath();
        if !path.contains(DSU_FORMAT) {
            return Ok(());
        }

        debug!(validator = "training", file = path, "file found");

        let content = read_document(path)?;
        let document = TrainingDocument::from_yaml(path, &content)?;

        // Other YAML may live next to training documents
        if document.tomegg.kind != TRAINING_TYPE {
            return Ok(());
        }

        self.validate_document(path, &document, ctx)?;

        info!(validator = "training", format = "dsu", file = path, "ok");
        Ok(())
    }
}
