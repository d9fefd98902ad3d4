//! Path types - classification of stream paths by the valences they cross

use crate::Valence;
use serde::{Deserialize, Serialize};

/// The type of a path through a mindset stream graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PathType {
    /// Every concept on the path is positive
    PurelyPositive,
    /// Every concept on the path is neutral
    PurelyNeutral,
    /// Every concept on the path is negative
    PurelyNegative,
    /// The path holds both positive and negative concepts
    Conflicting,
    /// Anything else
    Mixed,
}

impl PathType {
    pub const ALL: [PathType; 5] = [
        PathType::PurelyPositive,
        PathType::PurelyNeutral,
        PathType::PurelyNegative,
        PathType::Conflicting,
        PathType::Mixed,
    ];

    /// Classify a path from the valences of its concepts, in path order
    pub fn classify(valences: &[Valence]) -> Self {
        let all = |v: Valence| !valences.is_empty() && valences.iter().all(|x| *x == v);
        let any = |v: Valence| valences.contains(&v);

        if all(Valence::Positive) {
            PathType::PurelyPositive
        } else if all(Valence::Neutral) {
            PathType::PurelyNeutral
        } else if all(Valence::Negative) {
            PathType::PurelyNegative
        } else if any(Valence::Negative) && any(Valence::Positive) {
            PathType::Conflicting
        } else {
            PathType::Mixed
        }
    }
}

impl std::fmt::Display for PathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathType::PurelyPositive => write!(f, "purely positive path"),
            PathType::PurelyNeutral => write!(f, "purely neutral path"),
            PathType::PurelyNegative => write!(f, "purely negative path"),
            PathType::Conflicting => write!(f, "conflicting path"),
            PathType::Mixed => write!(f, "mixed path"),
        }
    }
}
