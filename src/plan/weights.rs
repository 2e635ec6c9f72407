//! Priority policy for plan ordering

/// Flat weight given to every file before its directory weight applies
pub const FILE_BASE_WEIGHT: u32 = 100;

const DEFAULT_WEIGHT: u32 = 100;

/// Checked in order; the first substring found in the path wins
const DIRECTORY_WEIGHTS: &[(&str, u32)] = &[
    ("meta", 110),
    ("evaluations", 100),
    ("flash-cards", 90),
    ("mappings", 90),
    ("mental-models", 90),
    ("training", 10),
];

pub fn directory_weight(path: &str) -> u32 {
    DIRECTORY_WEIGHTS
        .iter()
        .find(|(segment, _)| path.contains(segment))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_WEIGHT)
}
