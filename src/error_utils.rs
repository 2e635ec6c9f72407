//! Shared error utilities

use miette::NamedSource;
use std::path::{Path, PathBuf};

/// Toggle this to add spaces for iTerm2 clickability
const ADD_SPACES_FOR_ITERM: bool = true;

/// Make `path` relative to the working directory when it lives below it
pub fn to_display_path(path: &Path) -> PathBuf {
    let Ok(cwd) = std::env::current_dir() else {
        return path.to_path_buf();
    };
    match path.strip_prefix(&cwd) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

/// Format a file path for error display
///
/// When ADD_SPACES_FOR_ITERM is true, adds a space before the path
/// to make it clickable in iTerm2.
pub fn format_error_path(path: &Path) -> String {
    let path_str = to_display_path(path).display().to_string();

    if ADD_SPACES_FOR_ITERM {
        format!(" {path_str}")
    } else {
        path_str
    }
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(format_error_path(path), content)
}
