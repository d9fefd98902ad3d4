//! Association types - keyword pairs from a subject's mental lexicon

use crate::{EdgeValence, Valence};
use serde::{Deserialize, Serialize};

/// A conceptual connection between two keywords, with the sentiment
/// valence of each keyword once a lexicon has been attached
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Association {
    pub word_1: String,
    pub word_2: String,

    #[serde(default)]
    pub valence_1: Valence,

    #[serde(default)]
    pub valence_2: Valence,
}

impl Association {
    /// Create an unlabelled association. Words are canonicalized.
    pub fn new(word_1: impl Into<String>, word_2: impl Into<String>) -> Self {
        Self {
            word_1: Self::canonicalize(&word_1.into()),
            word_2: Self::canonicalize(&word_2.into()),
            valence_1: Valence::Unlabelled,
            valence_2: Valence::Unlabelled,
        }
    }

    /// Canonical form of a keyword: trimmed and lowercased
    pub fn canonicalize(word: &str) -> String {
        word.trim().to_lowercase()
    }

    /// Builder: set both valences
    pub fn with_valences(mut self, valence_1: Valence, valence_2: Valence) -> Self {
        self.valence_1 = valence_1;
        self.valence_2 = valence_2;
        self
    }

    /// Valence of the connection itself
    pub fn edge_valence(&self) -> EdgeValence {
        EdgeValence::combine(self.valence_1, self.valence_2)
    }

    /// True when both words are the same concept
    pub fn is_self_loop(&self) -> bool {
        self.word_1 == self.word_2
    }
}
