use serde::{Deserialize, Serialize};

use super::{DecodeError, Envelope};

/// A set of self evaluations, each referencing a DSU entry by id
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvaluationDocument {
    pub tomegg: Envelope,
    pub meta: EvaluationMeta,
    pub evaluations: Vec<EvaluationRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvaluationMeta {
    pub dimensions: Vec<Dimension>,
}

/// A named, versioned axis of assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    /// Short identifier used in measurements, e.g. `focus`
    pub alias: String,
    /// snake_case name used in the definition URL
    pub name: String,
    pub version: String,
    pub definition: String,
}

impl Dimension {
    /// Human readable title built from the snake_case name
    pub fn label(&self) -> String {
        self.name
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EvaluationRecord {
    pub id: String,
    pub measurements: Vec<Measurement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Measurement {
    pub dimension: String,
    /// Zero is a valid score; only absence is rejected
    pub score: Option<i64>,
    pub remarks: String,
    pub wins: String,
    pub mistakes: String,
    pub meta: Option<serde_yaml::Value>,
}

impl EvaluationDocument {
    pub fn from_yaml(path: &str, content: &str) -> Result<Self, DecodeError> {
        super::decode(path, content)
    }
}
