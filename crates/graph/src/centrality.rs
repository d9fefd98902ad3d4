//! Closeness and edge-betweenness centrality

use crate::bfs::ShortestPathDag;
use crate::ConceptGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Closeness centrality of every concept.
///
/// For a node reaching `r - 1` other nodes at total distance `t`, the
/// score is `(r - 1) / t` scaled by the reachable share `(r - 1) / (n - 1)`,
/// so nodes in small components are not overrated.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn closeness_centrality(graph: &ConceptGraph) -> HashMap<String, f64> {
    let n = graph.node_count();
    let mut closeness = HashMap::with_capacity(n);

    for idx in graph.inner().node_indices() {
        let dag = ShortestPathDag::from_source(graph, idx);
        let (reached, total) = dag
            .dist
            .iter()
            .flatten()
            .fold((0usize, 0usize), |(r, t), d| (r + 1, t + d));

        let score = if total > 0 && n > 1 {
            let others = (reached - 1) as f64;
            (others / total as f64) * (others / (n - 1) as f64)
        } else {
            0.0
        };
        closeness.insert(graph.label(idx).to_string(), score);
    }

    closeness
}

/// Betweenness score of every edge, keyed by its unordered endpoints
#[derive(Debug, Clone, Default)]
pub struct EdgeBetweenness {
    scores: HashMap<(String, String), f64>,
}

impl EdgeBetweenness {
    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// Score of the edge between `a` and `b`, in either orientation
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.scores.get(&Self::key(a, b)).copied()
    }

    /// Sum of the scores of consecutive pairs along a path.
    /// Pairs that are not edges contribute nothing.
    pub fn path_sum(&self, path: &[String]) -> f64 {
        path.windows(2)
            .filter_map(|pair| self.get(&pair[0], &pair[1]))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.scores
            .iter()
            .map(|((a, b), score)| (a.as_str(), b.as_str(), *score))
    }
}

/// Edge betweenness centrality (Brandes), normalised by `1 / (n (n - 1))`
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn edge_betweenness_centrality(graph: &ConceptGraph) -> EdgeBetweenness {
    let inner = graph.inner();
    let n = graph.node_count();
    let mut by_edge = vec![0.0f64; inner.edge_count()];

    for source in inner.node_indices() {
        let dag = ShortestPathDag::from_source(graph, source);
        let mut delta = vec![0.0f64; n];

        for &w in dag.order.iter().rev() {
            let coeff = (1.0 + delta[w.index()]) / dag.sigma[w.index()];
            for &v in &dag.preds[w.index()] {
                let c = dag.sigma[v.index()] * coeff;
                if let Some(edge) = inner.find_edge(v, w) {
                    by_edge[edge.index()] += c;
                }
                delta[v.index()] += c;
            }
        }
    }

    let scale = if n > 1 {
        1.0 / (n * (n - 1)) as f64
    } else {
        1.0
    };

    let scores: HashMap<(String, String), f64> = inner
        .edge_references()
        .map(|e| {
            let key = EdgeBetweenness::key(graph.label(e.source()), graph.label(e.target()));
            (key, by_edge[e.id().index()] * scale)
        })
        .collect();

    debug!("Computed betweenness for {} edges", scores.len());
    EdgeBetweenness { scores }
}
