//! Single-source breadth-first search over an unweighted concept graph,
//! recording the shortest-path DAG used by path enumeration and the
//! centrality measures.

use crate::ConceptGraph;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

pub(crate) struct ShortestPathDag {
    /// Nodes in the order they were settled (non-decreasing distance)
    pub order: Vec<NodeIndex>,
    pub dist: Vec<Option<usize>>,
    /// Number of shortest paths from the source
    pub sigma: Vec<f64>,
    /// Predecessors on shortest paths from the source
    pub preds: Vec<Vec<NodeIndex>>,
}

impl ShortestPathDag {
    pub fn from_source(graph: &ConceptGraph, source: NodeIndex) -> Self {
        let n = graph.node_count();
        let mut dag = Self {
            order: Vec::with_capacity(n),
            dist: vec![None; n],
            sigma: vec![0.0; n],
            preds: vec![Vec::new(); n],
        };

        dag.dist[source.index()] = Some(0);
        dag.sigma[source.index()] = 1.0;

        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            dag.order.push(v);
            let next = dag.dist[v.index()].map_or(0, |d| d + 1);

            for w in graph.neighbours(v) {
                match dag.dist[w.index()] {
                    None => {
                        dag.dist[w.index()] = Some(next);
                        queue.push_back(w);
                    }
                    Some(d) if d != next => continue,
                    Some(_) => {}
                }
                dag.sigma[w.index()] += dag.sigma[v.index()];
                dag.preds[w.index()].push(v);
            }
        }

        dag
    }

    pub fn distance(&self, node: NodeIndex) -> Option<usize> {
        self.dist[node.index()]
    }
}
