//! The validation plan: an ordered, deduplicated, weighted worklist
//!
//! Building a plan flattens the tree, keeps the first occurrence of every
//! directory path and file path, weights each entry and orders the lists so
//! heavier entries come first.

mod context;
mod weights;

#[cfg(test)]
mod tests;

pub use context::ValidationContext;
pub use weights::{FILE_BASE_WEIGHT, directory_weight};

use std::collections::HashSet;

use crate::tree::{DirId, FileId, Tree};

#[derive(Debug, Clone)]
pub struct ValidationPlan {
    pub(crate) tree: Tree,
    pub(crate) directories: Vec<DirId>,
    pub(crate) directory_weights: Vec<u32>,
    pub(crate) files: Vec<FileId>,
    pub(crate) file_weights: Vec<u32>,
    pub(crate) context: ValidationContext,
}

/// Build a plan over every directory and file reachable from the root
pub fn build_plan(tree: Tree) -> ValidationPlan {
    ValidationPlan::new(tree)
}

impl ValidationPlan {
    pub fn new(tree: Tree) -> Self {
        let (directories, files) = flatten(&tree);

        let mut weighted_dirs: Vec<(DirId, u32)> = directories
            .into_iter()
            .map(|id| (id, directory_weight(tree.directory(id).path())))
            .collect();

        let mut weighted_files: Vec<(FileId, u32)> = files
            .into_iter()
            .map(|id| {
                let file = tree.file(id);
                let parent = tree.directory(file.directory());
                (id, FILE_BASE_WEIGHT * directory_weight(parent.path()))
            })
            .collect();

        // Stable: equal weights keep walk order
        weighted_dirs.sort_by(|a, b| b.1.cmp(&a.1));
        weighted_files.sort_by(|a, b| b.1.cmp(&a.1));

        let (directories, directory_weights): (Vec<_>, Vec<_>) =
            weighted_dirs.into_iter().unzip();
        let (files, file_weights): (Vec<_>, Vec<_>) = weighted_files.into_iter().unzip();

        for id in &files {
            tracing::debug!(file = tree.file(*id).filepath(), "file added to plan");
        }

        Self {
            tree,
            directories,
            directory_weights,
            files,
            file_weights,
            context: ValidationContext::default(),
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Directories in processing order
    pub fn directories(&self) -> &[DirId] {
        &self.directories
    }

    /// Parallel to [`Self::directories`]
    pub fn directory_weights(&self) -> &[u32] {
        &self.directory_weights
    }

    /// Files in processing order
    pub fn files(&self) -> &[FileId] {
        &self.files
    }

    /// Parallel to [`Self::files`]
    pub fn file_weights(&self) -> &[u32] {
        &self.file_weights
    }

    /// File paths in processing order
    pub fn file_paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|id| self.tree.file(*id).filepath())
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.context.is_registered(id)
    }

    pub fn is_valid(&self, id: &str) -> bool {
        self.context.is_valid(id)
    }
}

/// Collect every reachable directory and file, dropping repeated paths
fn flatten(tree: &Tree) -> (Vec<DirId>, Vec<FileId>) {
    let mut seen_dirs = HashSet::new();
    let mut seen_files = HashSet::new();
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for dir_id in tree.walk_directories() {
        let directory = tree.directory(dir_id);
        if seen_dirs.insert(directory.path()) {
            directories.push(dir_id);
        }
        for file_id in directory.files() {
            if seen_files.insert(tree.file(*file_id).filepath()) {
                files.push(*file_id);
            }
        }
    }

    (directories, files)
}
