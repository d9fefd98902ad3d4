//! Graph-level statistics

use crate::ConceptGraph;
use mindstream_core::Valence;
use petgraph::algo::connected_components;
use serde::{Deserialize, Serialize};

/// Overview of a concept graph
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub self_loops: usize,
    pub components: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub unlabelled: usize,
}

impl ConceptGraph {
    /// Counts of nodes, edges and valences
    pub fn summary(&self) -> GraphSummary {
        let mut summary = GraphSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            self_loops: self.edges().filter(|(a, b, _)| a == b).count(),
            components: connected_components(self.inner()),
            ..Default::default()
        };

        for concept in self.concepts() {
            match concept.valence {
                Valence::Positive => summary.positive += 1,
                Valence::Neutral => summary.neutral += 1,
                Valence::Negative => summary.negative += 1,
                Valence::Unlabelled => summary.unlabelled += 1,
            }
        }

        summary
    }
}
