//! Graph layer for Mindset Streams
//!
//! Stores concepts and their associations in a `petgraph` undirected
//! graph and provides the path and centrality queries the stream
//! pipeline needs.

mod bfs;
pub mod centrality;
pub mod concept_graph;
pub mod error;
pub mod summary;

pub use centrality::{closeness_centrality, edge_betweenness_centrality, EdgeBetweenness};
pub use concept_graph::{Concept, ConceptGraph};
pub use error::{GraphError, Result};
pub use summary::GraphSummary;
