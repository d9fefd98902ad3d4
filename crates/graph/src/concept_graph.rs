//! The concept graph: keywords as nodes, sentiment-annotated associations
//! as undirected edges

use crate::bfs::ShortestPathDag;
use crate::{GraphError, Result};
use mindstream_core::{Association, EdgeValence, Valence};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument};

/// A keyword from the subject's mental lexicon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Concept {
    pub label: String,
    pub valence: Valence,
}

/// Undirected simple graph of concepts
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    graph: UnGraph<Concept, EdgeValence>,
    index: HashMap<String, NodeIndex>,
}

impl ConceptGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the base graph from sentiment-attached associations.
    ///
    /// A pair seen more than once keeps a single edge carrying the last
    /// row's valence; a concept's valence is that of its last mention.
    #[instrument(skip(associations), fields(rows = associations.len()))]
    pub fn from_associations(associations: &[Association]) -> Self {
        let mut graph = Self::new();

        for assoc in associations {
            let a = graph.add_concept(&assoc.word_1, assoc.valence_1);
            let b = graph.add_concept(&assoc.word_2, assoc.valence_2);
            graph.graph.update_edge(a, b, assoc.edge_valence());
        }

        info!(
            "Built concept graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Add a concept, or update the valence of an existing one
    pub fn add_concept(&mut self, label: &str, valence: Valence) -> NodeIndex {
        if let Some(&idx) = self.index.get(label) {
            self.graph[idx].valence = valence;
            return idx;
        }

        let idx = self.graph.add_node(Concept {
            label: label.to_string(),
            valence,
        });
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Connect two existing concepts, replacing any previous valence
    pub fn connect(&mut self, a: &str, b: &str, valence: EdgeValence) -> Result<()> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        self.graph.update_edge(a, b, valence);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn concept(&self, label: &str) -> Option<&Concept> {
        self.index.get(label).map(|&idx| &self.graph[idx])
    }

    /// Valence of a concept, `None` when it is not in the graph
    pub fn valence(&self, label: &str) -> Option<Valence> {
        self.concept(label).map(|c| c.valence)
    }

    /// Concepts in insertion order
    pub fn concepts(&self) -> impl Iterator<Item = &Concept> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Edges as `(label, label, valence)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, EdgeValence)> {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].label.as_str(),
                self.graph[e.target()].label.as_str(),
                *e.weight(),
            )
        })
    }

    /// Valence of the edge between two concepts, in either orientation
    pub fn edge_valence(&self, a: &str, b: &str) -> Option<EdgeValence> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    pub(crate) fn inner(&self) -> &UnGraph<Concept, EdgeValence> {
        &self.graph
    }

    pub(crate) fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].label
    }

    pub(crate) fn require(&self, label: &str) -> Result<NodeIndex> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))
    }

    /// Distinct neighbours of a node other than itself, in insertion order
    pub(crate) fn neighbours(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbours: Vec<NodeIndex> =
            self.graph.neighbors(idx).filter(|&n| n != idx).collect();
        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours
    }

    /// Every unweighted shortest path from `source` to `target`.
    ///
    /// Paths come out in the order a depth-first walk from the source
    /// would find them, visiting neighbours in insertion order.
    #[instrument(skip(self))]
    pub fn all_shortest_paths(&self, source: &str, target: &str) -> Result<Vec<Vec<String>>> {
        let from = self.require(source)?;
        let to = self.require(target)?;

        let dag = ShortestPathDag::from_source(self, from);
        if dag.distance(to).is_none() {
            return Err(GraphError::NoPath {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let mut found = Vec::new();
        let mut suffix = Vec::new();
        collect_paths(&dag.preds, from, to, &mut suffix, &mut found);
        found.sort();

        let paths: Vec<Vec<String>> = found
            .into_iter()
            .map(|path| path.into_iter().map(|idx| self.label(idx).to_string()).collect())
            .collect();

        debug!(
            "Found {} shortest paths of length {}",
            paths.len(),
            dag.distance(to).unwrap_or(0)
        );
        Ok(paths)
    }

    /// Subgraph composed of the given paths.
    ///
    /// Each path contributes the subgraph induced by its concepts; the
    /// union of those is returned with self-loops removed.
    #[instrument(skip(self, paths), fields(paths = paths.len()))]
    pub fn bridge_subgraph(&self, paths: &[Vec<String>]) -> Result<ConceptGraph> {
        let mut bridge = ConceptGraph::new();

        for path in paths {
            let members: Vec<NodeIndex> = path
                .iter()
                .map(|label| self.require(label))
                .collect::<Result<_>>()?;
            let member_set: HashSet<NodeIndex> = members.iter().copied().collect();

            for &idx in &members {
                let concept = &self.graph[idx];
                bridge.add_concept(&concept.label, concept.valence);
            }

            for &idx in &members {
                for edge in self.graph.edges(idx) {
                    let other = if edge.source() == idx {
                        edge.target()
                    } else {
                        edge.source()
                    };
                    if other == idx || !member_set.contains(&other) {
                        continue;
                    }
                    bridge.connect(self.label(idx), self.label(other), *edge.weight())?;
                }
            }
        }

        debug!(
            "Bridge subgraph has {} nodes and {} edges",
            bridge.node_count(),
            bridge.edge_count()
        );
        Ok(bridge)
    }
}

fn collect_paths(
    preds: &[Vec<NodeIndex>],
    source: NodeIndex,
    node: NodeIndex,
    suffix: &mut Vec<NodeIndex>,
    out: &mut Vec<Vec<NodeIndex>>,
) {
    suffix.push(node);
    if node == source {
        out.push(suffix.iter().rev().copied().collect());
    } else {
        for &pred in &preds[node.index()] {
            collect_paths(preds, source, pred, suffix, out);
        }
    }
    suffix.pop();
}
