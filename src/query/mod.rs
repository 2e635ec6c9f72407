//! Read-only queries over the documents in a plan
//!
//! Queries decode documents afresh and ignore whatever a validation run
//! recorded. Files that cannot be read or decoded are skipped.


use miette::Diagnostic;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::plan::ValidationPlan;
use crate::protocol::{
    DSU_FORMAT, Dimension, DsuEntry, EVALUATIONS_TYPE, EvaluationDocument, TRAINING_TYPE,
    TrainingDocument,
};

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("DSU entry with id {id} not found")]
    #[diagnostic(code(librarian::query::not_found))]
    EntryNotFound { id: String },

    #[error("no DSU entries found")]
    #[diagnostic(code(librarian::query::no_entries))]
    NoEntries,
}

fn read(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::debug!(file = path, error = %err, "skipping unreadable file");
            None
        }
    }
}

/// Every DSU entry in the plan, in plan order
pub fn dsu_entries(plan: &ValidationPlan) -> Vec<DsuEntry> {
    let mut entries = Vec::new();

    for path in plan.file_paths() {
        if !path.contains(DSU_FORMAT) || !path.contains(TRAINING_TYPE) {
            continue;
        }
        let Some(content) = read(path) else {
            continue;
        };
        let document = match TrainingDocument::from_yaml(path, &content) {
            Ok(document) => document,
            Err(err) => {
                tracing::debug!(file = path, error = %err, "skipping undecodable file");
                continue;
            }
        };
        if document.is_dsu() {
            entries.extend(document.content);
        }
    }

    entries
}

fn evaluation_documents(plan: &ValidationPlan) -> Vec<EvaluationDocument> {
    plan.file_paths()
        .filter(|path| path.contains(EVALUATIONS_TYPE))
        .filter_map(|path| {
            let content = read(path)?;
            EvaluationDocument::from_yaml(path, &content).ok()
        })
        .filter(|document| document.tomegg.kind == EVALUATIONS_TYPE)
        .collect()
}

/// Every id referenced by an evaluation record
pub fn evaluation_ids(plan: &ValidationPlan) -> Vec<String> {
    evaluation_documents(plan)
        .into_iter()
        .flat_map(|document| document.evaluations)
        .map(|record| record.id)
        .collect()
}

/// DSU entries no evaluation references, oldest first
///
/// With a `limit`, only the most recent `limit` entries are kept (still
/// oldest first). Entries without a date sort before dated ones.
pub fn find_missing_evaluations(plan: &ValidationPlan, limit: Option<usize>) -> Vec<DsuEntry> {
    let evaluated: HashSet<String> = evaluation_ids(plan).into_iter().collect();

    let mut missing: Vec<DsuEntry> = dsu_entries(plan)
        .into_iter()
        .filter(|entry| !evaluated.contains(&entry.id))
        .collect();

    missing.sort_by_key(|entry| entry.datetime);

    if let Some(limit) = limit
        && missing.len() > limit
    {
        missing.drain(..missing.len() - limit);
    }

    missing
}

/// The first DSU entry with `id`
pub fn dsu_by_id(plan: &ValidationPlan, id: &str) -> Result<DsuEntry, QueryError> {
    dsu_entries(plan)
        .into_iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| QueryError::EntryNotFound { id: id.to_string() })
}

/// The most recently dated DSU entry; the earliest listed wins ties
pub fn latest_dsu(plan: &ValidationPlan) -> Result<DsuEntry, QueryError> {
    let mut entries = dsu_entries(plan).into_iter();
    let mut latest = entries.next().ok_or(QueryError::NoEntries)?;
    for entry in entries {
        if entry.datetime > latest.datetime {
            latest = entry;
        }
    }
    Ok(latest)
}

/// Every declared dimension, keyed and sorted by alias
///
/// When two documents declare the same alias the later one wins.
pub fn dimensions(plan: &ValidationPlan) -> BTreeMap<String, Dimension> {
    let mut dimensions = BTreeMap::new();
    for document in evaluation_documents(plan) {
        for dimension in document.meta.dimensions {
            dimensions.insert(dimension.alias.clone(), dimension);
        }
    }
    dimensions
}
