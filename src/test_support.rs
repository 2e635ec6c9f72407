//! Fixture builders shared by unit tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

pub struct Entry<'a> {
    pub id: &'a str,
    pub datetime: &'a str,
    pub done_yesterday: &'a str,
    pub doing_today: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(id: &'a str, datetime: &'a str) -> Self {
        Self {
            id,
            datetime,
            done_yesterday: "Read a chapter",
            doing_today: "Write some code",
        }
    }
}

pub fn dsu_document(entries: &[Entry<'_>]) -> String {
    let mut yaml = String::from(
        "tomegg:\n  type: training\n  version: 0.1.0\n  definition: https://protocol.tome.gg/training/0.1.0\n\
         meta:\n  format:\n    type: dsu\n    version: 0.1.0\n    definition: https://protocol.tome.gg/formats/dsu/0.1.0\n\
         content:\n",
    );
    if entries.is_empty() {
        yaml.push_str("  []\n");
    }
    for entry in entries {
        yaml.push_str(&format!(
            "  - id: \"{}\"\n    datetime: \"{}\"\n    done_yesterday: \"{}\"\n    doing_today: \"{}\"\n",
            entry.id, entry.datetime, entry.done_yesterday, entry.doing_today
        ));
    }
    yaml
}

pub struct Score<'a> {
    pub id: &'a str,
    pub dimension: &'a str,
    pub score: Option<i64>,
}

pub fn evaluation_document(dimensions: &[(&str, &str)], records: &[Score<'_>]) -> String {
    let mut yaml = String::from(
        "tomegg:\n  type: evaluations\n  version: 0.1.0\n  definition: https://protocol.tome.gg/evaluations/0.1.0\n\
         meta:\n  dimensions:\n",
    );
    if dimensions.is_empty() {
        yaml.push_str("    []\n");
    }
    for (alias, name) in dimensions {
        yaml.push_str(&format!(
            "    - alias: {alias}\n      name: {name}\n      version: 0.1.0\n      definition: https://protocol.tome.gg/dimensions/{name}/0.1.0\n"
        ));
    }
    yaml.push_str("evaluations:\n");
    if records.is_empty() {
        yaml.push_str("  []\n");
    }
    for record in records {
        yaml.push_str(&format!(
            "  - id: \"{}\"\n    measurements:\n      - dimension: \"{}\"\n",
            record.id, record.dimension
        ));
        if let Some(score) = record.score {
            yaml.push_str(&format!("        score: {score}\n"));
        }
    }
    yaml
}
