use tracing::debug;

use super::{
    DsuTrainingValidator, EntityError, EntityKind, EvaluationValidator, ValidationError,
    Validator, Warning,
};
use crate::plan::{ValidationPlan, build_plan};
use crate::tree::{TreeError, load_tree};
use std::path::Path;

/// Everything a run produced, in the order it was found
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub errors: Vec<EntityError>,
    pub warnings: Vec<Warning>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors.into_iter().map(|e| e.error).collect()
    }
}

/// The ordered set of validators a plan is checked against
///
/// Order matters: a validator may depend on state registered by the ones
/// listed before it.
pub struct Registry {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Registry {
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// Training first, then evaluations, which resolve against training ids
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(DsuTrainingValidator::new()),
            Box::new(EvaluationValidator::new()),
        ])
    }

    /// Load the tree under `root`, build its plan and pair it with the standard validators
    pub fn init(root: impl AsRef<Path>) -> Result<(Self, ValidationPlan), TreeError> {
        let plan = build_plan(load_tree(root)?);
        Ok((Self::standard(), plan))
    }

    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every validator over every directory, then over every file
    ///
    /// State from any previous run is cleared first. Failures are recorded
    /// against their entity and collection continues.
    ///
    /// In the file phase each validator finishes the whole file list before
    /// the next one starts, so later validators see everything the earlier
    /// ones registered regardless of plan order.
    pub fn run(&self, plan: &mut ValidationPlan) -> ValidationOutcome {
        plan.context.reset();
        plan.tree.clear_errors();

        let mut errors = Vec::new();

        debug!("Validating the plan: Step 1 - validate directories");
        for &dir_id in &plan.directories {
            debug!(dir = plan.tree.directory(dir_id).path(), "validating dir");
            for validator in &self.validators {
                let result =
                    validator.validate_directory(plan.tree.directory(dir_id), &mut plan.context);
                if let Err(error) = result {
                    let directory = plan.tree.directory_mut(dir_id);
                    directory.error = Some(error.clone());
                    errors.push(EntityError {
                        path: directory.path().to_string(),
                        entity: EntityKind::Directory,
                        error,
                    });
                }
            }
        }

        debug!("Validating the plan: Step 2 - validate files");
        for validator in &self.validators {
            debug!(validator = validator.name(), "starting file stage");
            for &file_id in &plan.files {
                let file = plan.tree.file(file_id);
                debug!(validator = validator.name(), file = file.filepath(), "validating file");

                if let Err(error) = validator.validate_file(file, &mut plan.context) {
                    let path = file.filepath().to_string();
                    let parent = file.directory();

                    plan.tree.file_mut(file_id).error = Some(error.clone());
                    let directory = plan.tree.directory_mut(parent);
                    if !directory.erroneous_files.contains(&file_id) {
                        directory.erroneous_files.push(file_id);
                    }

                    errors.push(EntityError {
                        path,
                        entity: EntityKind::File,
                        error,
                    });
                }
            }
        }

        ValidationOutcome {
            errors,
            warnings: plan.context.take_warnings(),
        }
    }
}

/// Validate `plan` with the standard validators and return every error
pub fn validate_plan(plan: &mut ValidationPlan) -> Vec<ValidationError> {
    Registry::standard().run(plan).into_errors()
}
