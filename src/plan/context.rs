use std::collections::BTreeSet;

use crate::validation::Warning;

/// Mutable state shared by every validator during one run
///
/// Training ids move `unregistered -> registered -> valid` and dimension
/// names move `unknown -> known`. Nothing moves back until [`reset`].
///
/// [`reset`]: ValidationContext::reset
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    registered_training: BTreeSet<String>,
    valid_training: BTreeSet<String>,
    known_dimensions: BTreeSet<String>,
    warnings: Vec<Warning>,
}

impl ValidationContext {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record that a training entry with this id exists, valid or not
    pub fn register_training(&mut self, id: &str) {
        self.registered_training.insert(id.to_string());
    }

    /// Record that a registered training entry also passed validation
    pub fn mark_valid(&mut self, id: &str) {
        self.valid_training.insert(id.to_string());
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered_training.contains(id)
    }

    pub fn is_valid(&self, id: &str) -> bool {
        self.valid_training.contains(id)
    }

    pub fn registered_training(&self) -> &BTreeSet<String> {
        &self.registered_training
    }

    pub fn valid_training(&self) -> &BTreeSet<String> {
        &self.valid_training
    }

    pub fn register_dimension(&mut self, name: &str) {
        if !name.is_empty() {
            self.known_dimensions.insert(name.to_string());
        }
    }

    pub fn is_known_dimension(&self, name: &str) -> bool {
        self.known_dimensions.contains(name)
    }

    pub fn known_dimensions(&self) -> &BTreeSet<String> {
        &self.known_dimensions
    }

    /// Log a non-fatal finding and keep it for the run outcome
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub(crate) fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}
