//! Sentiment lexicon and valence attachment

use crate::import::{parse_record_array, read_file};
use crate::{Association, CoreError, Result, Valence};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Mapping from keyword to sentiment valence
#[derive(Debug, Clone, Default)]
pub struct ValenceLexicon {
    entries: HashMap<String, Valence>,
}

impl ValenceLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a lexicon from a JSON array of `{word, valence}` objects.
    ///
    /// The first string value of each object is the word and the second
    /// its valence label. Later entries for the same word win.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self> {
        let mut lexicon = Self::new();

        for (index, record) in parse_record_array(json)?.iter().enumerate() {
            let values: Vec<&str> = record
                .as_object()
                .map(|obj| obj.values().filter_map(Value::as_str).collect())
                .ok_or_else(|| CoreError::InvalidRecord {
                    index,
                    record: record.to_string(),
                })?;

            if values.len() < 2 {
                return Err(CoreError::MalformedRecord {
                    index,
                    expected: 2,
                    actual: values.len(),
                });
            }

            lexicon.insert(values[0], values[1].parse()?);
        }

        debug!("Parsed {} lexicon entries", lexicon.len());
        Ok(lexicon)
    }

    /// Load a lexicon from a JSON file
    #[instrument]
    pub fn load(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self> {
        let path = path.as_ref();
        let lexicon = Self::from_json(&read_file(path)?)?;
        info!("Loaded {} valence labels from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Add or replace the valence of a word
    pub fn insert(&mut self, word: &str, valence: Valence) {
        self.entries.insert(Association::canonicalize(word), valence);
    }

    /// Valence of a word, `Unlabelled` when the word is unknown
    pub fn valence_of(&self, word: &str) -> Valence {
        self.entries
            .get(&Association::canonicalize(word))
            .copied()
            .unwrap_or(Valence::Unlabelled)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Attach sentiment valence labels to association data
pub fn attach_sentiment(associations: Vec<Association>, lexicon: &ValenceLexicon) -> Vec<Association> {
    let attached: Vec<Association> = associations
        .into_iter()
        .map(|assoc| {
            let valence_1 = lexicon.valence_of(&assoc.word_1);
            let valence_2 = lexicon.valence_of(&assoc.word_2);
            assoc.with_valences(valence_1, valence_2)
        })
        .collect();

    let unlabelled = attached
        .iter()
        .filter(|a| a.valence_1 == Valence::Unlabelled || a.valence_2 == Valence::Unlabelled)
        .count();
    if unlabelled > 0 {
        debug!("{} associations have a word missing from the lexicon", unlabelled);
    }

    attached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdgeValence;

    fn lexicon() -> ValenceLexicon {
        ValenceLexicon::from_json(
            r#"[
                {"word": "Sun", "valence": "Positive"},
                {"word": "rain", "valence": "negative"},
                {"word": "cloud", "valence": "neutral"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lexicon_parsing() {
        let lexicon = lexicon();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.valence_of("sun"), Valence::Positive);
        assert_eq!(lexicon.valence_of("RAIN"), Valence::Negative);
        assert_eq!(lexicon.valence_of("snow"), Valence::Unlabelled);
    }

    #[test]
    fn test_later_entry_wins() {
        let lexicon = ValenceLexicon::from_json(
            r#"[{"w": "tea", "v": "neutral"}, {"w": "tea", "v": "positive"}]"#,
        )
        .unwrap();
        assert_eq!(lexicon.valence_of("tea"), Valence::Positive);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let result = ValenceLexicon::from_json(r#"[{"w": "tea", "v": "lukewarm"}]"#);
        assert!(matches!(result, Err(CoreError::UnknownValence(_))));
    }

    #[test]
    fn test_short_record_rejected() {
        let result = ValenceLexicon::from_json(r#"[{"w": "tea"}]"#);
        assert!(matches!(
            result,
            Err(CoreError::MalformedRecord { actual: 1, .. })
        ));
    }

    #[test]
    fn test_non_string_values_not_counted() {
        let result = ValenceLexicon::from_json(r#"[{"w": "tea", "v": 3}]"#);
        assert!(matches!(
            result,
            Err(CoreError::MalformedRecord {
                index: 0,
                expected: 2,
                actual: 1
            })
        ));

        let result = ValenceLexicon::from_json(r#"["tea"]"#);
        assert!(matches!(result, Err(CoreError::InvalidRecord { index: 0, .. })));
    }

    #[test]
    fn test_attach_sentiment() {
        let associations = vec![
            Association::new("sun", "rain"),
            Association::new("cloud", "snow"),
        ];
        let attached = attach_sentiment(associations, &lexicon());

        assert_eq!(attached[0].valence_1, Valence::Positive);
        assert_eq!(attached[0].valence_2, Valence::Negative);
        assert_eq!(attached[0].edge_valence(), EdgeValence::Conflicting);
        assert_eq!(attached[1].valence_2, Valence::Unlabelled);
    }
}
