//! Common test utilities

use mindstream_core::{attach_sentiment, parse_associations, ValenceLexicon};
use mindstream_graph::ConceptGraph;

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

/// Build the holiday fixture graph with sentiment attached
pub fn holiday_graph() -> ConceptGraph {
    let associations = parse_associations(ASSOCIATIONS).expect("fixture associations parse");
    let lexicon = ValenceLexicon::from_json(VALENCES).expect("fixture lexicon parses");
    ConceptGraph::from_associations(&attach_sentiment(associations, &lexicon))
}
