//! Tome.gg protocol documents
//!
//! Every document carries a `tomegg` envelope naming its type, version and
//! canonical definition URL. Documents are decoded per file and never kept
//! around between runs.

pub mod datetime;
mod error;
mod evaluation;
mod training;


pub use error::DecodeError;
pub use evaluation::{Dimension, EvaluationDocument, EvaluationMeta, EvaluationRecord, Measurement};
pub use training::{DsuEntry, TrainingDocument, TrainingMeta};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const PROTOCOL_HOST: &str = "https://protocol.tome.gg";

/// The only protocol and format version this validator understands
pub const SUPPORTED_VERSION: &str = "0.1.0";

pub const TRAINING_TYPE: &str = "training";
pub const EVALUATIONS_TYPE: &str = "evaluations";
pub const DSU_FORMAT: &str = "dsu";

/// `{type, version, definition}` header shared by documents and formats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub definition: String,
}

/// `https://protocol.tome.gg/{type}/{version}`
pub fn tomegg_definition(kind: &str, version: &str) -> String {
    format!("{PROTOCOL_HOST}/{kind}/{version}")
}

/// `https://protocol.tome.gg/formats/{type}/{version}`
pub fn format_definition(format_type: &str, version: &str) -> String {
    format!("{PROTOCOL_HOST}/formats/{format_type}/{version}")
}

/// `https://protocol.tome.gg/dimensions/{name}/{version}`
pub fn dimension_definition(name: &str, version: &str) -> String {
    format!("{PROTOCOL_HOST}/dimensions/{name}/{version}")
}

/// Decode YAML `content` read from `path`
///
/// A blank document decodes to `T::default()`.
pub(crate) fn decode<T>(path: &str, content: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Default,
{
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(content).map_err(|err| DecodeError::from_yaml(path, content, &err))
}
