//! Builds a [`Tree`] by walking the file system
//!
//! The walk is depth-first in file-name order. Blacklisted directories are
//! pruned before they are descended into.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{DirId, Tree, TreeError};
use crate::config::LoaderConfig;

/// Walk `root` with the default [`LoaderConfig`]
pub fn load_tree(root: impl AsRef<Path>) -> Result<Tree, TreeError> {
    load_tree_with_config(root, &LoaderConfig::default())
}

/// Walk `root`, attaching every non-pruned file to its immediate parent
///
/// The first entry the walk fails on stops the walk and is returned as
/// [`TreeError::Traversal`].
pub fn load_tree_with_config(
    root: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<Tree, TreeError> {
    let root = root.as_ref();
    let mut tree = Tree::new(root.to_string_lossy());
    let mut memo: HashMap<PathBuf, DirId> = HashMap::new();
    memo.insert(root.to_path_buf(), tree.root());

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let relative = relative_path(root, entry.path());
            if config.is_blacklisted(&relative) {
                tracing::debug!(dir = %entry.path().display(), "skipping blacklisted dir");
                return false;
            }
            true
        });

    for entry in walker {
        let entry = entry.map_err(|source| TreeError::Traversal {
            path: source
                .path()
                .unwrap_or(root)
                .to_string_lossy()
                .into_owned(),
            source,
        })?;

        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let parent = path
            .parent()
            .and_then(|parent| memo.get(parent).copied())
            .unwrap_or_else(|| tree.root());
        let path_str = path.to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            tracing::debug!(
                parent = tree.directory(parent).path(),
                subdir = %path_str,
                "adding dir"
            );
            let id = tree.add_directory(parent, path_str);
            memo.insert(path.to_path_buf(), id);
        } else {
            if !config.accepts_file(&path_str) {
                tracing::debug!(file = %path_str, "skipping file outside extension whitelist");
                continue;
            }
            tracing::debug!(
                parent = tree.directory(parent).path(),
                file = %path_str,
                "adding file"
            );
            tree.add_file(parent, path_str);
        }
    }

    Ok(tree)
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
