//! Common test utilities

use mindstream_core::{attach_sentiment, load_associations, Association, ValenceLexicon};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ASSOCIATIONS: &str = r#"[
    {"word 1": "Holiday", "word 2": "sun"},
    {"word 1": "holiday", "word 2": "travel"},
    {"word 1": "sun", "word 2": "beach"},
    {"word 1": "travel", "word 2": "airport"},
    {"word 1": "travel", "word 2": "beach"},
    {"word 1": "airport", "word 2": "delay"},
    {"word 1": "beach", "word 2": "relax"},
    {"word 1": "delay", "word 2": "stress"},
    {"word 1": "relax", "word 2": "relax"}
]"#;

pub const VALENCES: &str = r#"[
    {"word": "holiday", "valence": "positive"},
    {"word": "sun", "valence": "positive"},
    {"word": "travel", "valence": "neutral"},
    {"word": "beach", "valence": "positive"},
    {"word": "airport", "valence": "neutral"},
    {"word": "delay", "valence": "negative"},
    {"word": "relax", "valence": "positive"},
    {"word": "stress", "valence": "negative"}
]"#;

/// Fixture files written into a temporary directory
pub struct Fixture {
    pub dir: TempDir,
    pub associations: PathBuf,
    pub valences: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let associations = dir.path().join("associations.json");
        let valences = dir.path().join("valences.json");
        std::fs::write(&associations, ASSOCIATIONS).expect("Failed to write associations");
        std::fs::write(&valences, VALENCES).expect("Failed to write valences");
        Self {
            dir,
            associations,
            valences,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Load the fixture files with sentiment attached
    pub fn load(&self) -> Vec<Association> {
        load_with_sentiment(&self.associations, &self.valences)
    }
}

pub fn load_with_sentiment(associations: &Path, valences: &Path) -> Vec<Association> {
    let associations = load_associations(associations).expect("Failed to load associations");
    let lexicon = ValenceLexicon::load(valences).expect("Failed to load lexicon");
    attach_sentiment(associations, &lexicon)
}
