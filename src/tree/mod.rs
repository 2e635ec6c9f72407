//! In-memory model of a walked directory tree
//!
//! Directories and files live in two arenas owned by [`Tree`]. A directory
//! refers to its children by id and a file refers back to its parent
//! directory by id, so there is no ownership cycle between them.

mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use error::TreeError;
pub use loader::{load_tree, load_tree_with_config};

use crate::validation::ValidationError;

/// Index of a [`Directory`] inside its [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirId(usize);

/// Index of a [`File`] inside its [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(usize);

/// A reference to an existing folder
#[derive(Debug, Clone)]
pub struct Directory {
    path: String,
    subdirectories: Vec<DirId>,
    files: Vec<FileId>,
    pub(crate) error: Option<ValidationError>,
    pub(crate) erroneous_files: Vec<FileId>,
}

impl Directory {
    fn new(path: String) -> Self {
        Self {
            path,
            subdirectories: Vec::new(),
            files: Vec::new(),
            error: None,
            erroneous_files: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn subdirectories(&self) -> &[DirId] {
        &self.subdirectories
    }

    pub fn files(&self) -> &[FileId] {
        &self.files
    }

    /// Error recorded against this directory by the last validation run
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Files in this directory that failed the last validation run
    pub fn erroneous_files(&self) -> &[FileId] {
        &self.erroneous_files
    }
}

/// A reference to an existing file
#[derive(Debug, Clone)]
pub struct File {
    filepath: String,
    directory: DirId,
    pub(crate) error: Option<ValidationError>,
}

impl File {
    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    /// The directory this file was found in
    pub fn directory(&self) -> DirId {
        self.directory
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

/// A directory tree rooted at a single path
#[derive(Debug, Clone)]
pub struct Tree {
    directories: Vec<Directory>,
    files: Vec<File>,
}

impl Tree {
    /// Create a tree holding only its root directory
    pub fn new(root_path: impl Into<String>) -> Self {
        Self {
            directories: vec![Directory::new(root_path.into())],
            files: Vec::new(),
        }
    }

    pub fn root(&self) -> DirId {
        DirId(0)
    }

    /// Attach a new subdirectory under `parent`
    pub fn add_directory(&mut self, parent: DirId, path: impl Into<String>) -> DirId {
        let id = DirId(self.directories.len());
        self.directories.push(Directory::new(path.into()));
        self.directories[parent.0].subdirectories.push(id);
        id
    }

    /// Attach a new file to `directory`
    pub fn add_file(&mut self, directory: DirId, filepath: impl Into<String>) -> FileId {
        let id = FileId(self.files.len());
        self.files.push(File {
            filepath: filepath.into(),
            directory,
            error: None,
        });
        self.directories[directory.0].files.push(id);
        id
    }

    pub fn directory(&self, id: DirId) -> &Directory {
        &self.directories[id.0]
    }

    pub fn file(&self, id: FileId) -> &File {
        &self.files[id.0]
    }

    pub(crate) fn directory_mut(&mut self, id: DirId) -> &mut Directory {
        &mut self.directories[id.0]
    }

    pub(crate) fn file_mut(&mut self, id: FileId) -> &mut File {
        &mut self.files[id.0]
    }

    /// Number of directories in the tree, root included
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Every directory reachable from the root, depth-first, parents first
    pub fn walk_directories(&self) -> Vec<DirId> {
        let mut out = Vec::with_capacity(self.directories.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.directory(id).subdirectories.iter().rev().copied());
        }
        out
    }

    /// Drop every error recorded by a previous validation run
    pub(crate) fn clear_errors(&mut self) {
        for directory in &mut self.directories {
            directory.error = None;
            directory.erroneous_files.clear();
        }
        for file in &mut self.files {
            file.error = None;
        }
    }

    /// Render the validation status of every directory, one line each
    pub fn status_report(&self) -> String {
        let mut report = String::new();
        for id in self.walk_directories() {
            let directory = self.directory(id);
            let summary = format!(
                "Path [{}] has a total of {} directories and {} files.",
                directory.path,
                directory.subdirectories.len(),
                directory.files.len()
            );
            match &directory.error {
                Some(error) => {
                    report.push_str(&format!(" ❌ {summary} Validation failed: {error}\n"))
                }
                None => report.push_str(&format!(" ✅ {summary}\n")),
            }
            for file_id in &directory.erroneous_files {
                let file = self.file(*file_id);
                if let Some(error) = &file.error {
                    report.push_str(&format!("    ❌ File [{}]: {error}\n", file.filepath));
                }
            }
        }
        report
    }
}
