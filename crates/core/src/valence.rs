//! Sentiment valence of concepts and of the connections between them

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentiment polarity of a single concept
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Valence {
    Positive,
    Neutral,
    Negative,
    /// The concept has no entry in the sentiment lexicon
    #[default]
    Unlabelled,
}

impl std::fmt::Display for Valence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Valence::Positive => write!(f, "positive"),
            Valence::Neutral => write!(f, "neutral"),
            Valence::Negative => write!(f, "negative"),
            Valence::Unlabelled => write!(f, "unlabelled"),
        }
    }
}

impl FromStr for Valence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Valence::Positive),
            "neutral" => Ok(Valence::Neutral),
            "negative" => Ok(Valence::Negative),
            _ => Err(CoreError::UnknownValence(s.to_string())),
        }
    }
}

/// Sentiment of a connection, derived from the valences at both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgeValence {
    Positive,
    Neutral,
    Negative,
    /// One end positive, the other negative
    Conflicting,
    #[default]
    Unlabelled,
}

impl EdgeValence {
    /// Combine the valences of two connected concepts.
    ///
    /// A neutral end dominates, so neutral-positive and neutral-negative
    /// connections are neutral. Opposite polarities conflict.
    pub fn combine(a: Valence, b: Valence) -> Self {
        use Valence::*;
        match (a, b) {
            (Unlabelled, _) | (_, Unlabelled) => EdgeValence::Unlabelled,
            (Neutral, _) | (_, Neutral) => EdgeValence::Neutral,
            (Positive, Positive) => EdgeValence::Positive,
            (Negative, Negative) => EdgeValence::Negative,
            (Positive, Negative) | (Negative, Positive) => EdgeValence::Conflicting,
        }
    }
}

impl std::fmt::Display for EdgeValence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeValence::Positive => write!(f, "positive"),
            EdgeValence::Neutral => write!(f, "neutral"),
            EdgeValence::Negative => write!(f, "negative"),
            EdgeValence::Conflicting => write!(f, "conflicting"),
            EdgeValence::Unlabelled => write!(f, "unlabelled"),
        }
    }
}
