use chrono::{DateTime, Utc};
use miette::SourceSpan;
use serde::{Deserialize, Serialize};

use super::{DecodeError, Envelope, datetime};

/// A training document; `content` holds one entry per daily standup
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrainingDocument {
    pub tomegg: Envelope,
    pub meta: TrainingMeta,
    pub content: Vec<DsuEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrainingMeta {
    pub format: Envelope,
    pub tags: Vec<String>,
}

/// A daily standup entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsuEntry {
    pub id: String,

    /// The date exactly as written in the document
    #[serde(rename = "datetime")]
    pub datetime_raw: String,

    /// Parsed from `datetime_raw`; `None` when the raw string is blank
    #[serde(skip_deserializing, rename = "datetime_value")]
    pub datetime: Option<DateTime<Utc>>,

    pub remarks: String,
    pub done_yesterday: String,
    pub doing_today: String,
    pub blockers: String,
}

impl TrainingDocument {
    /// Decode a training document, parsing every non-blank entry date
    pub fn from_yaml(path: &str, content: &str) -> Result<Self, DecodeError> {
        let mut document: Self = super::decode(path, content)?;
        for entry in &mut document.content {
            entry.resolve_datetime(path, content)?;
        }
        Ok(document)
    }

    pub fn is_dsu(&self) -> bool {
        self.tomegg.kind == super::TRAINING_TYPE && self.meta.format.kind == super::DSU_FORMAT
    }
}

impl DsuEntry {
    fn resolve_datetime(&mut self, path: &str, content: &str) -> Result<(), DecodeError> {
        let raw = self.datetime_raw.trim();
        if raw.is_empty() {
            return Ok(());
        }

        let parsed = datetime::parse_any(raw).map_err(|err| {
            let span = content
                .find(raw)
                .map(|offset| SourceSpan::new(offset.into(), raw.len()));
            DecodeError::new(path, content, span, format!("failed to parse date: {err}"))
        })?;
        self.datetime = Some(parsed);
        Ok(())
    }
}
