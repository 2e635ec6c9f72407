//! Settings for walking and querying a Tome.gg repository
//!
//! Settings are read from an optional `.librarian.yml` at the root of the
//! walked tree. Every field has a default, so an absent file and an empty
//! file behave the same.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up at the root of the walked tree
pub const SETTINGS_FILE: &str = ".librarian.yml";

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read settings file {path}")]
    #[diagnostic(code(librarian::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}")]
    #[diagnostic(code(librarian::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Controls which entries the tree loader keeps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directories whose path contains any of these segments are pruned
    pub blacklist: Vec<String>,

    /// Extensions kept when `filter_extensions` is enabled
    pub extension_whitelist: Vec<String>,

    /// Off by default: every file is attached regardless of extension
    pub filter_extensions: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            blacklist: vec![".git".to_string()],
            extension_whitelist: vec![".md".to_string(), ".yaml".to_string()],
            filter_extensions: false,
        }
    }
}

impl LoaderConfig {
    pub fn is_blacklisted(&self, path: &str) -> bool {
        self.blacklist
            .iter()
            .any(|segment| path.contains(segment.as_str()))
    }

    pub fn accepts_file(&self, path: &str) -> bool {
        if !self.filter_extensions {
            return true;
        }
        self.extension_whitelist
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub loader: LoaderConfig,

    /// How many entries `missing-evaluations` shows without `--all`
    pub missing_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            missing_limit: 3,
        }
    }
}

impl Settings {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // serde_yaml rejects an empty document for a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load `.librarian.yml` from `root`, falling back to defaults when absent
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(SETTINGS_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}
